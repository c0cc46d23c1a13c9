//! Domain model for workspace membership.

mod error;
mod ids;
mod membership;

pub use error::WorkspaceDomainError;
pub use ids::{MemberId, WorkspaceId};
pub use membership::{MemberRole, MemberStatus, Membership};
