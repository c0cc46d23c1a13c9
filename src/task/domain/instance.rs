//! Date-bound task instances produced by expansion.

use super::{DateSpan, EditableOccurrence, Hours, Task, TaskId};
use crate::roster::domain::{EmployeeId, ProjectId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task merged with the values that apply on one calendar day.
///
/// Instances are derived on every expansion and have no lifecycle of their
/// own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInstance {
    /// Base task identifier.
    pub task_id: TaskId,
    /// Base task name.
    pub name: String,
    /// Owning project.
    pub project_id: ProjectId,
    /// Base task description.
    pub description: Option<String>,
    /// Day the instance is shown and counted on.
    pub instance_date: NaiveDate,
    /// Generated date keying overrides; differs from `instance_date` only
    /// for relocated occurrences.
    pub occurrence_date: NaiveDate,
    /// Whether an override exists for this occurrence.
    pub is_exception: bool,
    /// Whether the instance comes from a recurrence rule.
    pub is_recurring: bool,
    /// Effort after overrides.
    pub estimated_time: Hours,
    /// Assignee after overrides.
    pub assigned_employee_id: Option<EmployeeId>,
    /// Days the effort is spread over.
    pub span: DateSpan,
}

impl TaskInstance {
    /// Builds the instance of a one-off task first visible on
    /// `instance_date`.
    #[must_use]
    pub fn one_off(task: &Task, instance_date: NaiveDate, span: DateSpan) -> Self {
        Self {
            task_id: task.id(),
            name: task.name().to_owned(),
            project_id: task.project_id(),
            description: task.description().map(str::to_owned),
            instance_date,
            occurrence_date: instance_date,
            is_exception: false,
            is_recurring: false,
            estimated_time: task.estimated_time(),
            assigned_employee_id: task.assigned_employee_id(),
            span,
        }
    }

    /// Builds one occurrence of a recurring task, overlaying the override
    /// if there is one.
    #[must_use]
    pub fn occurrence(
        task: &Task,
        occurrence_date: NaiveDate,
        exception: Option<&EditableOccurrence>,
    ) -> Self {
        let instance_date = exception.map_or(occurrence_date, EditableOccurrence::effective_date);
        Self {
            task_id: task.id(),
            name: task.name().to_owned(),
            project_id: task.project_id(),
            description: task.description().map(str::to_owned),
            instance_date,
            occurrence_date,
            is_exception: exception.is_some(),
            is_recurring: true,
            estimated_time: exception.map_or(task.estimated_time(), |occurrence| {
                occurrence.effective_estimated_time(task.estimated_time())
            }),
            assigned_employee_id: exception.map_or(task.assigned_employee_id(), |occurrence| {
                occurrence.effective_assignee(task.assigned_employee_id())
            }),
            span: DateSpan::single(instance_date),
        }
    }

    /// Returns whether the instance belongs to the unallocated pool.
    #[must_use]
    pub const fn is_unallocated(&self) -> bool {
        self.assigned_employee_id.is_none()
    }
}
