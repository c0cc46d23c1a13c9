//! Error types for drag gestures and payloads.

use crate::task::domain::TaskId;
use thiserror::Error;

/// Errors returned by invalid gesture transitions or malformed payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// A drag is already in progress.
    #[error("task {0} is already being dragged")]
    AlreadyDragging(TaskId),

    /// The event needs an active drag.
    #[error("no drag is in progress")]
    NoActiveDrag,

    /// The gesture already ended in a drop or cancellation.
    #[error("drag gesture has already finished")]
    GestureFinished,

    /// The wire payload could not be decoded.
    #[error("invalid drag payload: {0}")]
    InvalidPayload(String),
}
