//! In-memory repository for workspace memberships.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::workspace::{
    domain::{MemberId, Membership, WorkspaceId},
    ports::{MembershipRepository, MembershipRepositoryError, MembershipRepositoryResult},
};

/// Thread-safe in-memory membership repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMembershipRepository {
    state: Arc<RwLock<HashMap<MemberId, Membership>>>,
}

impl InMemoryMembershipRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> MembershipRepositoryResult<RwLockReadGuard<'_, HashMap<MemberId, Membership>>> {
        self.state.read().map_err(|err| {
            MembershipRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(
        &self,
    ) -> MembershipRepositoryResult<RwLockWriteGuard<'_, HashMap<MemberId, Membership>>> {
        self.state.write().map_err(|err| {
            MembershipRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn by_invitation_time(mut memberships: Vec<Membership>) -> Vec<Membership> {
    memberships.sort_by(|a, b| {
        a.invited_at()
            .cmp(&b.invited_at())
            .then_with(|| a.id().cmp(&b.id()))
    });
    memberships
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn store(&self, membership: &Membership) -> MembershipRepositoryResult<()> {
        let mut state = self.write()?;
        let duplicate = state.values().any(|existing| {
            existing.workspace_id() == membership.workspace_id()
                && existing.email() == membership.email()
        });
        if duplicate {
            return Err(MembershipRepositoryError::DuplicateInvitation {
                workspace_id: membership.workspace_id(),
                email: membership.email().to_owned(),
            });
        }
        state.insert(membership.id(), membership.clone());
        Ok(())
    }

    async fn update(&self, membership: &Membership) -> MembershipRepositoryResult<()> {
        let mut state = self.write()?;
        let slot = state
            .get_mut(&membership.id())
            .ok_or(MembershipRepositoryError::NotFound(membership.id()))?;
        *slot = membership.clone();
        Ok(())
    }

    async fn remove(&self, id: MemberId) -> MembershipRepositoryResult<()> {
        self.write()?
            .remove(&id)
            .map(|_| ())
            .ok_or(MembershipRepositoryError::NotFound(id))
    }

    async fn find(&self, id: MemberId) -> MembershipRepositoryResult<Option<Membership>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn members_of(
        &self,
        workspace_id: WorkspaceId,
    ) -> MembershipRepositoryResult<Vec<Membership>> {
        let members = self
            .read()?
            .values()
            .filter(|membership| membership.workspace_id() == workspace_id)
            .cloned()
            .collect();
        Ok(by_invitation_time(members))
    }

    async fn invitations_for(&self, email: &str) -> MembershipRepositoryResult<Vec<Membership>> {
        let normalized = email.trim().to_lowercase();
        let invitations = self
            .read()?
            .values()
            .filter(|membership| membership.is_pending() && membership.email() == normalized)
            .cloned()
            .collect();
        Ok(by_invitation_time(invitations))
    }
}
