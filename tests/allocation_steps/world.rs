//! Shared world state for allocation BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use workplan::allocation::services::{AllocationOutcome, AllocationService};
use workplan::roster::{adapters::memory::InMemoryRosterRepository, domain::EmployeeId};
use workplan::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::{OccurrenceService, TaskLifecycleService},
};
use workplan::workload::services::WorkloadService;

/// Scenario world for allocation behaviour tests.
pub struct AllocationWorld {
    pub tasks: Arc<InMemoryTaskRepository>,
    pub roster: Arc<InMemoryRosterRepository>,
    pub lifecycle: TaskLifecycleService<InMemoryTaskRepository, DefaultClock>,
    pub occurrences: OccurrenceService<InMemoryTaskRepository>,
    pub allocation:
        AllocationService<InMemoryTaskRepository, InMemoryRosterRepository, DefaultClock>,
    pub workload: WorkloadService<InMemoryTaskRepository, InMemoryRosterRepository, DefaultClock>,
    pub employees: HashMap<String, EmployeeId>,
    pub current_task: Option<Task>,
    pub last_outcome: Option<AllocationOutcome>,
}

impl AllocationWorld {
    /// Creates a world over empty repositories.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let roster = Arc::new(InMemoryRosterRepository::new());
        let clock = Arc::new(DefaultClock);
        Self {
            lifecycle: TaskLifecycleService::new(Arc::clone(&tasks), Arc::clone(&clock)),
            occurrences: OccurrenceService::new(Arc::clone(&tasks)),
            allocation: AllocationService::new(
                Arc::clone(&tasks),
                Arc::clone(&roster),
                Arc::clone(&clock),
            ),
            workload: WorkloadService::new(Arc::clone(&tasks), Arc::clone(&roster), clock),
            tasks,
            roster,
            employees: HashMap::new(),
            current_task: None,
            last_outcome: None,
        }
    }

    /// Looks up an employee created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no employee has that name.
    pub fn employee(&self, name: &str) -> Result<EmployeeId, eyre::Report> {
        self.employees
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown employee {name} in scenario world"))
    }

    /// Returns the task the scenario is working with.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.current_task
            .as_ref()
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for AllocationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AllocationWorld {
    AllocationWorld::default()
}

/// Parses an ISO date captured from a step.
///
/// # Errors
///
/// Returns an error for malformed dates.
pub fn parse_date(raw: &str) -> Result<NaiveDate, eyre::Report> {
    raw.parse::<NaiveDate>()
        .wrap_err_with(|| format!("parse step date {raw}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
