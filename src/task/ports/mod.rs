//! Port contracts for task and occurrence persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod occurrence;
pub mod repository;

pub use occurrence::OccurrenceRepository;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
