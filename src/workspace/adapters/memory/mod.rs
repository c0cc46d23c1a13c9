//! In-memory membership adapter.

mod membership;

pub use membership::InMemoryMembershipRepository;
