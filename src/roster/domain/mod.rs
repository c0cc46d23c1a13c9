//! Domain model for employees and projects.

mod employee;
mod error;
mod ids;
mod project;

pub use employee::{DEFAULT_WORK_DAYS, Employee};
pub use error::RosterDomainError;
pub use ids::{EmployeeId, ProjectId};
pub use project::Project;
