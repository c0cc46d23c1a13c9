//! Service layer applying allocation decisions.

mod allocate;

pub use allocate::{
    AllocationOutcome, AllocationService, AllocationServiceError, AllocationServiceResult,
    DiscardReason,
};
