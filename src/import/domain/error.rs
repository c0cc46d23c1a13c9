//! Error types for import rows and sessions.

use crate::task::{domain::TaskDomainError, services::TaskLifecycleError};
use thiserror::Error;

/// Failure to coerce or persist one imported row.
#[derive(Debug, Error)]
pub enum ImportRowError {
    /// A required column is absent or blank.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A column holds a value of the wrong shape.
    #[error("invalid value for '{field}': {value}")]
    InvalidField {
        /// Column name.
        field: &'static str,
        /// Offending value as received.
        value: String,
    },

    /// The values do not form a valid task.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Creating or updating the task failed.
    #[error(transparent)]
    Task(#[from] TaskLifecycleError),
}

/// Invalid transitions of an [`super::ImportSession`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ImportSessionError {
    /// An import is already running.
    #[error("an import is already running")]
    AlreadyRunning,

    /// No import is running.
    #[error("no import is running")]
    NotRunning,
}
