//! Error types for workload planning.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while building planning windows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkloadDomainError {
    /// The window ends before it starts.
    #[error("planning window ends on {end} before it starts on {start}")]
    InvalidWindow {
        /// First requested day.
        start: NaiveDate,
        /// Last requested day.
        end: NaiveDate,
    },

    /// The window would extend past the supported calendar.
    #[error("no planning window can be built around {0}")]
    OutOfCalendar(NaiveDate),
}
