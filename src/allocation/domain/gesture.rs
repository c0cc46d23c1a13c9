//! Per-drag state machine.

use super::{AllocationRequest, DragPayload, DropTarget, SourceSurface, TransportError};

/// State of one drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// Nothing is being dragged.
    #[default]
    Idle,
    /// A task has been picked up.
    Dragging {
        /// Dragged item.
        payload: DragPayload,
        /// Where the drag started.
        source: SourceSurface,
    },
    /// The task was dropped on a target.
    Dropped {
        /// Dragged item.
        payload: DragPayload,
        /// Drop target.
        target: DropTarget,
    },
    /// The drag ended without a drop.
    Cancelled {
        /// Dragged item.
        payload: DragPayload,
    },
}

/// What a finished gesture asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportEvent {
    /// Resolve and apply this request.
    Allocate(AllocationRequest),
    /// Nothing changes.
    Discarded(DragPayload),
}

/// Tracks a single drag from pick-up to drop or cancellation.
///
/// # Examples
///
/// ```
/// use workplan::allocation::domain::{
///     DragGesture, DragPayload, DropTarget, SourceSurface, SurfaceKind, TransportEvent,
/// };
/// use workplan::task::domain::TaskId;
///
/// let mut gesture = DragGesture::new();
/// let payload = DragPayload::for_task(TaskId::new());
/// gesture
///     .pick_up(payload, SourceSurface::new(SurfaceKind::UnallocatedPool))
///     .expect("idle gesture");
/// let event = gesture.drop_on(DropTarget::DeallocationZone).expect("dragging");
/// assert!(matches!(event, TransportEvent::Allocate(_)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    /// Creates an idle gesture.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Starts dragging `payload` from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::AlreadyDragging`] during a drag and
    /// [`TransportError::GestureFinished`] after it ended.
    pub const fn pick_up(
        &mut self,
        payload: DragPayload,
        source: SourceSurface,
    ) -> Result<(), TransportError> {
        match self.state {
            DragState::Idle => {
                self.state = DragState::Dragging { payload, source };
                Ok(())
            }
            DragState::Dragging { payload: active, .. } => {
                Err(TransportError::AlreadyDragging(active.task_id))
            }
            DragState::Dropped { .. } | DragState::Cancelled { .. } => {
                Err(TransportError::GestureFinished)
            }
        }
    }

    /// Drops the dragged task on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::NoActiveDrag`] before a pick-up and
    /// [`TransportError::GestureFinished`] after the gesture ended.
    pub fn drop_on(&mut self, target: DropTarget) -> Result<TransportEvent, TransportError> {
        let (payload, _) = self.active()?;
        self.state = DragState::Dropped { payload, target };
        Ok(TransportEvent::Allocate(AllocationRequest::new(payload, target)))
    }

    /// Ends the drag without a drop.
    ///
    /// Surfaces that unassign on cancel turn this into a request for the
    /// deallocation zone; anything else is discarded.
    ///
    /// # Errors
    ///
    /// Same as [`DragGesture::drop_on`].
    pub fn cancel(&mut self) -> Result<TransportEvent, TransportError> {
        let (payload, source) = self.active()?;
        self.state = DragState::Cancelled { payload };
        if source.unassign_on_cancel() {
            Ok(TransportEvent::Allocate(AllocationRequest::new(
                payload,
                DropTarget::DeallocationZone,
            )))
        } else {
            Ok(TransportEvent::Discarded(payload))
        }
    }

    /// Returns to idle so the gesture can be reused.
    pub const fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    const fn active(&self) -> Result<(DragPayload, SourceSurface), TransportError> {
        match self.state {
            DragState::Dragging { payload, source } => Ok((payload, source)),
            DragState::Idle => Err(TransportError::NoActiveDrag),
            DragState::Dropped { .. } | DragState::Cancelled { .. } => {
                Err(TransportError::GestureFinished)
            }
        }
    }
}
