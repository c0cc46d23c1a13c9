//! Error types for roster validation.

use thiserror::Error;

/// Errors returned while constructing employees and projects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterDomainError {
    /// The employee name is empty after trimming.
    #[error("employee name must not be empty")]
    EmptyEmployeeName,

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// An employee must work on at least one weekday.
    #[error("employee must have at least one work day")]
    NoWorkDays,
}
