//! Shared fixtures for the in-memory planning flows.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;
use workplan::allocation::services::AllocationService;
use workplan::roster::{
    adapters::memory::InMemoryRosterRepository, domain::Employee, ports::EmployeeRepository,
};
use workplan::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Hours,
    services::{OccurrenceService, TaskLifecycleService},
};
use workplan::workload::services::WorkloadService;

/// Wires every planning service over shared in-memory repositories.
pub struct Planner {
    pub tasks: Arc<InMemoryTaskRepository>,
    pub roster: Arc<InMemoryRosterRepository>,
    pub lifecycle: TaskLifecycleService<InMemoryTaskRepository, DefaultClock>,
    pub occurrences: OccurrenceService<InMemoryTaskRepository>,
    pub allocation:
        AllocationService<InMemoryTaskRepository, InMemoryRosterRepository, DefaultClock>,
    pub workload: WorkloadService<InMemoryTaskRepository, InMemoryRosterRepository, DefaultClock>,
}

impl Planner {
    /// Creates a planner with empty repositories.
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
        }
    }

    /// Stores a Monday to Friday employee with the given weekly hours.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee is invalid or cannot be stored.
    pub async fn hire(&self, name: &str, weekly_hours: u16) -> Result<Employee, eyre::Report> {
        let employee = Employee::new(name, Hours::from_whole(weekly_hours))?;
        self.roster.store_employee(&employee).await?;
        Ok(employee)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates an empty planner.
#[fixture]
pub fn planner() -> Planner {
    Planner::default()
}

/// Builds a calendar date.
///
/// # Panics
///
/// Panics when the components do not form a valid date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
