//! Application services for workspace membership.

mod membership;

pub use membership::{MembershipService, MembershipServiceError, MembershipServiceResult};
