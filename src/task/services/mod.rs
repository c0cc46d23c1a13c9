//! Application services for tasks and their occurrences.

mod lifecycle;
mod occurrence;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
    UpdateTaskRequest,
};
pub use occurrence::{
    OccurrenceService, OccurrenceServiceError, OccurrenceServiceResult, ensure_occurrence,
};
