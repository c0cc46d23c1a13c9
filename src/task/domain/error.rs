//! Error types for task domain validation.

use super::TaskId;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or changing task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The value is not a non-negative hour amount with at most two decimals.
    #[error("invalid hours '{0}', expected a non-negative number with at most two decimals")]
    InvalidHours(String),

    /// The schedule ends before it starts.
    #[error("schedule ends on {end} before it starts on {start}")]
    InvalidDateSpan {
        /// First scheduled day.
        start: NaiveDate,
        /// Last scheduled day.
        end: NaiveDate,
    },

    /// Recurrence intervals must be at least one.
    #[error("recurrence interval must be at least 1")]
    ZeroRecurrenceInterval,

    /// A count-bounded recurrence must produce at least one occurrence.
    #[error("recurrence occurrence count must be at least 1")]
    ZeroOccurrenceCount,

    /// The recurrence end date precedes its first date.
    #[error("recurrence ends on {until} before it starts on {starts_on}")]
    RecurrenceEndsBeforeStart {
        /// First date of the series.
        starts_on: NaiveDate,
        /// Inclusive end date.
        until: NaiveDate,
    },

    /// The task has no recurrence rule.
    #[error("task {0} does not recur")]
    NotRecurring(TaskId),

    /// The date is not generated by the task's recurrence rule.
    #[error("task {task_id} has no occurrence on {date}")]
    NotAnOccurrence {
        /// Recurring task.
        task_id: TaskId,
        /// Requested occurrence date.
        date: NaiveDate,
    },
}
