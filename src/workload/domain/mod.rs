//! Domain model for workload aggregation.

mod aggregate;
mod band;
mod config;
mod error;
mod window;

pub use aggregate::{DayLoad, WorkloadReport, aggregate};
pub use band::Band;
pub use config::{DistributionPolicy, WorkloadConfig};
pub use error::WorkloadDomainError;
pub use window::PlanningWindow;
