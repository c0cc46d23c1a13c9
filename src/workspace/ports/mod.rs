//! Port contracts for membership persistence.

pub mod repository;

pub use repository::{MembershipRepository, MembershipRepositoryError, MembershipRepositoryResult};
