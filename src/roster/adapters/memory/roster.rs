//! In-memory repository for employees and projects.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::roster::{
    domain::{Employee, EmployeeId, Project, ProjectId},
    ports::{EmployeeRepository, ProjectRepository, RosterRepositoryError, RosterRepositoryResult},
};

/// Thread-safe in-memory roster repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterRepository {
    state: Arc<RwLock<InMemoryRosterState>>,
}

#[derive(Debug, Default)]
struct InMemoryRosterState {
    employees: HashMap<EmployeeId, Employee>,
    projects: HashMap<ProjectId, Project>,
}

impl InMemoryRosterRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RosterRepositoryResult<RwLockReadGuard<'_, InMemoryRosterState>> {
        self.state.read().map_err(|err| {
            RosterRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> RosterRepositoryResult<RwLockWriteGuard<'_, InMemoryRosterState>> {
        self.state.write().map_err(|err| {
            RosterRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryRosterRepository {
    async fn store_employee(&self, employee: &Employee) -> RosterRepositoryResult<()> {
        let mut state = self.write()?;
        if state.employees.contains_key(&employee.id()) {
            return Err(RosterRepositoryError::DuplicateEmployee(employee.id()));
        }
        state.employees.insert(employee.id(), employee.clone());
        Ok(())
    }

    async fn find_employee(&self, id: EmployeeId) -> RosterRepositoryResult<Option<Employee>> {
        Ok(self.read()?.employees.get(&id).cloned())
    }

    async fn list_employees(&self) -> RosterRepositoryResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self.read()?.employees.values().cloned().collect();
        employees.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));
        Ok(employees)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryRosterRepository {
    async fn store_project(&self, project: &Project) -> RosterRepositoryResult<()> {
        let mut state = self.write()?;
        if state.projects.contains_key(&project.id()) {
            return Err(RosterRepositoryError::DuplicateProject(project.id()));
        }
        state.projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn find_project(&self, id: ProjectId) -> RosterRepositoryResult<Option<Project>> {
        Ok(self.read()?.projects.get(&id).cloned())
    }

    async fn list_projects(&self) -> RosterRepositoryResult<Vec<Project>> {
        let mut projects: Vec<Project> = self.read()?.projects.values().cloned().collect();
        projects.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));
        Ok(projects)
    }
}
