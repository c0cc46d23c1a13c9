//! Invitation and membership management.

use crate::workspace::{
    domain::{MemberId, MemberRole, Membership, WorkspaceDomainError, WorkspaceId},
    ports::{MembershipRepository, MembershipRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for membership changes.
#[derive(Debug, Error)]
pub enum MembershipServiceError {
    /// The change violates a membership rule.
    #[error(transparent)]
    Domain(#[from] WorkspaceDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] MembershipRepositoryError),
}

/// Result type for membership service operations.
pub type MembershipServiceResult<T> = Result<T, MembershipServiceError>;

/// Invites, admits and removes workspace members.
#[derive(Clone)]
pub struct MembershipService<R, C>
where
    R: MembershipRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> MembershipService<R, C>
where
    R: MembershipRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new membership service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers the owner of a freshly created workspace.
    ///
    /// # Errors
    ///
    /// Returns domain errors for invalid emails and repository errors
    /// otherwise.
    pub async fn found_workspace(&self, email: &str) -> MembershipServiceResult<Membership> {
        let owner = Membership::owner(WorkspaceId::new(), email, &*self.clock)?;
        self.repository.store(&owner).await?;
        tracing::info!(workspace = %owner.workspace_id(), "workspace created");
        Ok(owner)
    }

    /// Sends a pending invitation.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::InvalidEmail`] (wrapped) for bad
    /// addresses and [`MembershipRepositoryError::DuplicateInvitation`]
    /// (wrapped) when the email already belongs to the workspace.
    pub async fn invite(
        &self,
        workspace_id: WorkspaceId,
        email: &str,
        role: MemberRole,
    ) -> MembershipServiceResult<Membership> {
        let invitation = Membership::invite(workspace_id, email, role, &*self.clock)?;
        self.repository.store(&invitation).await?;
        tracing::info!(
            workspace = %workspace_id,
            member = %invitation.id(),
            "invitation sent"
        );
        Ok(invitation)
    }

    /// Accepts a pending invitation.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipRepositoryError::NotFound`] (wrapped) for unknown
    /// members and [`WorkspaceDomainError::AlreadyActive`] (wrapped) when the
    /// invitation was already accepted.
    pub async fn accept_invitation(&self, id: MemberId) -> MembershipServiceResult<Membership> {
        let mut membership = self.load(id).await?;
        membership.accept(&*self.clock)?;
        self.repository.update(&membership).await?;
        tracing::info!(member = %id, "invitation accepted");
        Ok(membership)
    }

    /// Removes a member, or declines a pending invitation.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::OwnerRemoval`] (wrapped) for an active
    /// owner and [`MembershipRepositoryError::NotFound`] (wrapped) for
    /// unknown members.
    pub async fn remove_member(&self, id: MemberId) -> MembershipServiceResult<Membership> {
        let membership = self.load(id).await?;
        membership.ensure_removable()?;
        self.repository.remove(id).await?;
        tracing::info!(member = %id, pending = membership.is_pending(), "membership removed");
        Ok(membership)
    }

    /// Declines a pending invitation.
    ///
    /// # Errors
    ///
    /// Same as [`MembershipService::remove_member`].
    pub async fn decline_invitation(&self, id: MemberId) -> MembershipServiceResult<Membership> {
        self.remove_member(id).await
    }

    /// Lists the members of a workspace, pending invitations included.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn members(
        &self,
        workspace_id: WorkspaceId,
    ) -> MembershipServiceResult<Vec<Membership>> {
        Ok(self.repository.members_of(workspace_id).await?)
    }

    /// Lists the open invitations addressed to `email`.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn pending_invitations(
        &self,
        email: &str,
    ) -> MembershipServiceResult<Vec<Membership>> {
        Ok(self.repository.invitations_for(email).await?)
    }

    async fn load(&self, id: MemberId) -> MembershipServiceResult<Membership> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| MembershipRepositoryError::NotFound(id).into())
    }
}
