//! Domain model for task templates, recurrence and occurrences.
//!
//! Recurring tasks generate occurrences from their rule; stored overrides
//! alter or cancel single occurrences without touching the rule. Expansion
//! turns both into date-bound [`TaskInstance`] values.

mod error;
mod expansion;
mod hours;
mod ids;
mod instance;
mod occurrence;
mod recurrence;
mod span;
mod task;

pub use error::TaskDomainError;
pub use expansion::{Occurrences, expand, expand_all};
pub use hours::Hours;
pub use ids::TaskId;
pub use instance::TaskInstance;
pub use occurrence::{AssigneeOverride, EditableOccurrence, OccurrenceOverride, OccurrenceSnapshot};
pub use recurrence::{Frequency, RecurrenceEnd, RecurrenceRule, RuleDates};
pub use span::DateSpan;
pub use task::{PersistedTaskData, Task};
