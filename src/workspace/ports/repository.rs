//! Repository port for workspace memberships.

use crate::workspace::domain::{MemberId, Membership, WorkspaceId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for membership repository operations.
pub type MembershipRepositoryResult<T> = Result<T, MembershipRepositoryError>;

/// Membership persistence contract.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Stores a new membership.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipRepositoryError::DuplicateInvitation`] when the
    /// email is already a member of the workspace.
    async fn store(&self, membership: &Membership) -> MembershipRepositoryResult<()>;

    /// Persists changes to an existing membership.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipRepositoryError::NotFound`] when it does not exist.
    async fn update(&self, membership: &Membership) -> MembershipRepositoryResult<()>;

    /// Deletes a membership.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipRepositoryError::NotFound`] when it does not exist.
    async fn remove(&self, id: MemberId) -> MembershipRepositoryResult<()>;

    /// Finds a membership by identifier.
    async fn find(&self, id: MemberId) -> MembershipRepositoryResult<Option<Membership>>;

    /// Returns the memberships of a workspace, oldest invitation first.
    async fn members_of(&self, workspace_id: WorkspaceId)
    -> MembershipRepositoryResult<Vec<Membership>>;

    /// Returns the pending invitations addressed to `email`.
    async fn invitations_for(&self, email: &str) -> MembershipRepositoryResult<Vec<Membership>>;
}

/// Errors returned by membership repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MembershipRepositoryError {
    /// The email already belongs to the workspace.
    #[error("{email} is already a member of workspace {workspace_id}")]
    DuplicateInvitation {
        /// Target workspace.
        workspace_id: WorkspaceId,
        /// Invited email.
        email: String,
    },

    /// The membership was not found.
    #[error("membership not found: {0}")]
    NotFound(MemberId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MembershipRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
