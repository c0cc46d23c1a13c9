//! Membership of a user in a workspace.

use super::{MemberId, WorkspaceDomainError, WorkspaceId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Permissions a member holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// Created the workspace.
    Owner,
    /// Manages members and settings.
    Admin,
    /// Plans and allocates tasks.
    Member,
    /// Read-only access.
    Guest,
}

/// Whether the invitation has been accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Invited, not yet accepted.
    Pending,
    /// Accepted.
    Active,
}

/// A user's membership in one workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    id: MemberId,
    workspace_id: WorkspaceId,
    email: String,
    role: MemberRole,
    status: MemberStatus,
    invited_at: DateTime<Utc>,
    joined_at: Option<DateTime<Utc>>,
}

impl Membership {
    /// Creates a pending invitation.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::InvalidEmail`] for blank addresses or
    /// addresses without `@`.
    pub fn invite(
        workspace_id: WorkspaceId,
        email: impl Into<String>,
        role: MemberRole,
        clock: &impl Clock,
    ) -> Result<Self, WorkspaceDomainError> {
        let raw = email.into();
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || !normalized.contains('@') {
            return Err(WorkspaceDomainError::InvalidEmail(raw));
        }
        Ok(Self {
            id: MemberId::new(),
            workspace_id,
            email: normalized,
            role,
            status: MemberStatus::Pending,
            invited_at: clock.utc(),
            joined_at: None,
        })
    }

    /// Creates the active owner membership of a new workspace.
    ///
    /// # Errors
    ///
    /// Same as [`Membership::invite`].
    pub fn owner(
        workspace_id: WorkspaceId,
        email: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, WorkspaceDomainError> {
        let mut membership = Self::invite(workspace_id, email, MemberRole::Owner, clock)?;
        membership.accept(clock)?;
        Ok(membership)
    }

    /// Returns the membership identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the workspace.
    #[must_use]
    pub const fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    /// Returns the invited email, lower-cased.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> MemberRole {
        self.role
    }

    /// Returns the invitation status.
    #[must_use]
    pub const fn status(&self) -> MemberStatus {
        self.status
    }

    /// Returns when the invitation was sent.
    #[must_use]
    pub const fn invited_at(&self) -> DateTime<Utc> {
        self.invited_at
    }

    /// Returns when the invitation was accepted.
    #[must_use]
    pub const fn joined_at(&self) -> Option<DateTime<Utc>> {
        self.joined_at
    }

    /// Returns whether the invitation is still open.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == MemberStatus::Pending
    }

    /// Accepts the invitation.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::AlreadyActive`] when the member has
    /// already joined.
    pub fn accept(&mut self, clock: &impl Clock) -> Result<(), WorkspaceDomainError> {
        if !self.is_pending() {
            return Err(WorkspaceDomainError::AlreadyActive(self.id));
        }
        self.status = MemberStatus::Active;
        self.joined_at = Some(clock.utc());
        Ok(())
    }

    /// Checks that the membership may be removed.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::OwnerRemoval`] for active owners.
    pub fn ensure_removable(&self) -> Result<(), WorkspaceDomainError> {
        if self.role == MemberRole::Owner && !self.is_pending() {
            return Err(WorkspaceDomainError::OwnerRemoval(self.id));
        }
        Ok(())
    }
}
