//! Domain model for drag-and-drop allocation.

mod error;
mod gesture;
mod resolver;
mod transport;

pub use error::TransportError;
pub use gesture::{DragGesture, DragState, TransportEvent};
pub use resolver::{
    AllocationDecision, RejectionReason, ResolutionState, TaskMutation, resolve,
};
pub use transport::{
    AllocationRequest, DragPayload, DropTarget, ITEM_TYPE, SourceSurface, SurfaceKind,
    unallocated_pool,
};
