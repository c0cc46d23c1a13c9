//! Port contracts for roster lookups.

pub mod repository;

pub use repository::{
    EmployeeRepository, ProjectRepository, RosterRepositoryError, RosterRepositoryResult,
};
