//! Builds workload reports from stored tasks and the roster.

use crate::roster::ports::{EmployeeRepository, RosterRepositoryError};
use crate::task::{
    domain::expand_all,
    ports::{OccurrenceRepository, TaskRepository, TaskRepositoryError},
};
use crate::workload::domain::{
    PlanningWindow, WorkloadConfig, WorkloadDomainError, WorkloadReport, aggregate,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for workload reporting.
#[derive(Debug, Error)]
pub enum WorkloadServiceError {
    /// The requested window is invalid.
    #[error(transparent)]
    Domain(#[from] WorkloadDomainError),
    /// Loading tasks or overrides failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Loading the roster failed.
    #[error(transparent)]
    Roster(#[from] RosterRepositoryError),
}

/// Result type for workload service operations.
pub type WorkloadServiceResult<T> = Result<T, WorkloadServiceError>;

/// Computes workload reports for planning windows.
#[derive(Clone)]
pub struct WorkloadService<T, E, C>
where
    T: TaskRepository + OccurrenceRepository,
    E: EmployeeRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    employees: Arc<E>,
    clock: Arc<C>,
    config: WorkloadConfig,
}

impl<T, E, C> WorkloadService<T, E, C>
where
    T: TaskRepository + OccurrenceRepository,
    E: EmployeeRepository,
    C: Clock + Send + Sync,
{
    /// Creates a workload service with the default configuration.
    #[must_use]
    pub fn new(tasks: Arc<T>, employees: Arc<E>, clock: Arc<C>) -> Self {
        Self::with_config(tasks, employees, clock, WorkloadConfig::default())
    }

    /// Creates a workload service with an explicit configuration.
    #[must_use]
    pub const fn with_config(
        tasks: Arc<T>,
        employees: Arc<E>,
        clock: Arc<C>,
        config: WorkloadConfig,
    ) -> Self {
        Self {
            tasks,
            employees,
            clock,
            config,
        }
    }

    /// Expands every task over `window` and aggregates the result.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadServiceError`] when a repository lookup fails.
    pub async fn window_report(
        &self,
        window: PlanningWindow,
    ) -> WorkloadServiceResult<WorkloadReport> {
        let tasks = self.tasks.list_all().await?;
        let overrides = self.tasks.list_occurrences().await?;
        let employees = self.employees.list_employees().await?;

        let instances = expand_all(&tasks, &overrides, window.start(), window.end());
        let report = aggregate(&instances, &employees, self.config).within(window);
        tracing::debug!(
            start = %window.start(),
            end = %window.end(),
            instances = instances.len(),
            unallocated = report.unallocated().len(),
            "workload report computed"
        );
        Ok(report)
    }

    /// Reports on the week containing today.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadServiceError`] when the window cannot be built or a
    /// repository lookup fails.
    pub async fn current_week_report(&self) -> WorkloadServiceResult<WorkloadReport> {
        let window = PlanningWindow::current_week(&*self.clock)?;
        self.window_report(window).await
    }
}
