//! In-memory roster adapters.

mod roster;

pub use roster::InMemoryRosterRepository;
