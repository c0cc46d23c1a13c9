//! Error types for membership changes.

use super::MemberId;
use thiserror::Error;

/// Errors returned by invalid membership changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceDomainError {
    /// The invited email is blank or lacks an `@`.
    #[error("invalid member email '{0}'")]
    InvalidEmail(String),

    /// Only pending invitations can be accepted.
    #[error("member {0} has already accepted")]
    AlreadyActive(MemberId),

    /// The workspace owner cannot leave their own workspace.
    #[error("member {0} owns the workspace and cannot be removed")]
    OwnerRemoval(MemberId),
}
