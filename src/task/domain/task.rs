//! Task aggregate root.

use super::{DateSpan, Hours, RecurrenceRule, TaskDomainError, TaskId};
use crate::roster::domain::{EmployeeId, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Base task template.
///
/// A task either recurs (its [`RecurrenceRule`] generates occurrence dates)
/// or is scheduled once over a [`DateSpan`]. A task without schedule or
/// rule sits in the backlog until it is dropped on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    project_id: ProjectId,
    estimated_time: Hours,
    assigned_employee_id: Option<EmployeeId>,
    schedule: Option<DateSpan>,
    recurrence: Option<RecurrenceRule>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: String,
    /// Owning project.
    pub project_id: ProjectId,
    /// Estimated effort per occurrence (or for the whole one-off span).
    pub estimated_time: Hours,
    /// Assignee, `None` for the unallocated pool.
    pub assigned_employee_id: Option<EmployeeId>,
    /// One-off schedule, if any.
    pub schedule: Option<DateSpan>,
    /// Recurrence rule, if any.
    pub recurrence: Option<RecurrenceRule>,
    /// Free-form description.
    pub description: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates an unassigned, unscheduled task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        project_id: ProjectId,
        estimated_time: Hours,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        Self::with_id(TaskId::new(), name, project_id, estimated_time, clock)
    }

    /// Creates a task with a known identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the name is blank.
    pub fn with_id(
        id: TaskId,
        name: impl Into<String>,
        project_id: ProjectId,
        estimated_time: Hours,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id,
            name: validate_name(name.into())?,
            project_id,
            estimated_time,
            assigned_employee_id: None,
            schedule: None,
            recurrence: None,
            description: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            project_id: data.project_id,
            estimated_time: data.estimated_time,
            assigned_employee_id: data.assigned_employee_id,
            schedule: data.schedule,
            recurrence: data.recurrence,
            description: data.description,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Sets the initial assignee.
    #[must_use]
    pub const fn with_assignee(mut self, employee_id: EmployeeId) -> Self {
        self.assigned_employee_id = Some(employee_id);
        self
    }

    /// Sets the initial one-off schedule.
    #[must_use]
    pub const fn with_schedule(mut self, schedule: DateSpan) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Makes the task recurring.
    #[must_use]
    pub fn with_recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the estimated effort.
    #[must_use]
    pub const fn estimated_time(&self) -> Hours {
        self.estimated_time
    }

    /// Returns the assignee, `None` when the task is unallocated.
    #[must_use]
    pub const fn assigned_employee_id(&self) -> Option<EmployeeId> {
        self.assigned_employee_id
    }

    /// Returns the one-off schedule, if any.
    #[must_use]
    pub const fn schedule(&self) -> Option<DateSpan> {
        self.schedule
    }

    /// Returns the recurrence rule, if any.
    #[must_use]
    pub const fn recurrence(&self) -> Option<&RecurrenceRule> {
        self.recurrence.as_ref()
    }

    /// Returns whether the task recurs.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Assigns the task to an employee, or returns it to the pool with
    /// `None`.
    pub fn assign(&mut self, employee_id: Option<EmployeeId>, clock: &impl Clock) {
        self.assigned_employee_id = employee_id;
        self.touch(clock);
    }

    /// Moves the one-off schedule.
    pub fn reschedule(&mut self, schedule: DateSpan, clock: &impl Clock) {
        self.schedule = Some(schedule);
        self.touch(clock);
    }

    /// Changes the estimated effort.
    pub fn set_estimated_time(&mut self, estimated_time: Hours, clock: &impl Clock) {
        self.estimated_time = estimated_time;
        self.touch(clock);
    }

    /// Renames the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the name is blank.
    pub fn rename(
        &mut self,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.name = validate_name(name.into())?;
        self.touch(clock);
        Ok(())
    }

    /// Moves the task to another project.
    pub fn move_to_project(&mut self, project_id: ProjectId, clock: &impl Clock) {
        self.project_id = project_id;
        self.touch(clock);
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: Option<String>, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn validate_name(raw: String) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTaskName);
    }
    Ok(trimmed.to_owned())
}
