//! Repository ports for employees and projects.

use crate::roster::domain::{Employee, EmployeeId, Project, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for roster repository operations.
pub type RosterRepositoryResult<T> = Result<T, RosterRepositoryError>;

/// Employee persistence contract.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new employee.
    ///
    /// # Errors
    ///
    /// Returns [`RosterRepositoryError::DuplicateEmployee`] when the
    /// identifier already exists.
    async fn store_employee(&self, employee: &Employee) -> RosterRepositoryResult<()>;

    /// Finds an employee by identifier.
    async fn find_employee(&self, id: EmployeeId) -> RosterRepositoryResult<Option<Employee>>;

    /// Returns every employee ordered by name.
    async fn list_employees(&self) -> RosterRepositoryResult<Vec<Employee>>;
}

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`RosterRepositoryError::DuplicateProject`] when the
    /// identifier already exists.
    async fn store_project(&self, project: &Project) -> RosterRepositoryResult<()>;

    /// Finds a project by identifier.
    async fn find_project(&self, id: ProjectId) -> RosterRepositoryResult<Option<Project>>;

    /// Returns every project ordered by name.
    async fn list_projects(&self) -> RosterRepositoryResult<Vec<Project>>;
}

/// Errors returned by roster repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RosterRepositoryError {
    /// An employee with the same identifier already exists.
    #[error("duplicate employee identifier: {0}")]
    DuplicateEmployee(EmployeeId),

    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RosterRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
