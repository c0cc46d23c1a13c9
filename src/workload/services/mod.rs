//! Service layer for workload reports.

mod report;

pub use report::{WorkloadService, WorkloadServiceError, WorkloadServiceResult};
