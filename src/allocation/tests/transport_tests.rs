//! Drag payloads and gesture transitions.

use super::date;
use crate::allocation::domain::{
    AllocationRequest, DragGesture, DragPayload, DragState, DropTarget, ITEM_TYPE, SourceSurface,
    SurfaceKind, TransportError, TransportEvent, unallocated_pool,
};
use crate::roster::domain::{EmployeeId, ProjectId};
use crate::task::domain::{Hours, Task, TaskId};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn payload() -> DragPayload {
    DragPayload::for_occurrence(TaskId::new(), date(2025, 3, 4))
}

#[rstest]
fn payload_wire_format_carries_only_identifiers(payload: DragPayload) {
    let wire: serde_json::Value =
        serde_json::from_str(&payload.to_json().expect("serializable")).expect("valid json");

    assert_eq!(wire["type"], ITEM_TYPE);
    assert_eq!(wire["task_id"], payload.task_id.to_string());
    assert_eq!(wire["source_date"], "2025-03-04");
    assert_eq!(wire.as_object().map(serde_json::Map::len), Some(3));
}

#[rstest]
fn whole_task_payload_omits_source_date() {
    let wire = DragPayload::for_task(TaskId::new())
        .to_json()
        .expect("serializable");

    assert!(!wire.contains("source_date"));
}

#[rstest]
#[case(r#"{"type":"employee","task_id":"6f1c0c9e-2f4b-4f7e-9f55-0c7d3f1c2b10"}"#)]
#[case(r#"{"type":"task"}"#)]
#[case("not json")]
fn foreign_payloads_are_rejected(#[case] raw: &str) {
    assert!(matches!(
        DragPayload::from_json(raw),
        Err(TransportError::InvalidPayload(_))
    ));
}

#[rstest]
fn drop_produces_request_for_target(payload: DragPayload) {
    let mut gesture = DragGesture::new();
    gesture
        .pick_up(payload, SourceSurface::new(SurfaceKind::Calendar))
        .expect("idle gesture");
    let target = DropTarget::DayCell {
        date: date(2025, 3, 6),
        employee_id: Some(EmployeeId::new()),
    };

    let event = gesture.drop_on(target).expect("dragging");

    assert_eq!(
        event,
        TransportEvent::Allocate(AllocationRequest::new(payload, target))
    );
    assert_eq!(gesture.state(), &DragState::Dropped { payload, target });
}

#[rstest]
fn cancel_is_discarded_unless_surface_unassigns(payload: DragPayload) {
    let mut plain = DragGesture::new();
    plain
        .pick_up(payload, SourceSurface::new(SurfaceKind::TaskList))
        .expect("idle gesture");
    let mut unassigning = DragGesture::new();
    unassigning
        .pick_up(
            payload,
            SourceSurface::new(SurfaceKind::Calendar).unassigning_on_cancel(),
        )
        .expect("idle gesture");

    assert_eq!(plain.cancel(), Ok(TransportEvent::Discarded(payload)));
    assert_eq!(
        unassigning.cancel(),
        Ok(TransportEvent::Allocate(AllocationRequest::new(
            payload,
            DropTarget::DeallocationZone
        )))
    );
    assert_eq!(plain.state(), &DragState::Cancelled { payload });
}

#[rstest]
fn invalid_transitions_are_errors(payload: DragPayload) {
    let source = SourceSurface::new(SurfaceKind::Calendar);
    let mut gesture = DragGesture::new();

    assert_eq!(
        gesture.drop_on(DropTarget::UnallocatedPool),
        Err(TransportError::NoActiveDrag)
    );
    assert_eq!(gesture.cancel(), Err(TransportError::NoActiveDrag));

    gesture.pick_up(payload, source).expect("idle gesture");
    assert_eq!(
        gesture.pick_up(payload, source),
        Err(TransportError::AlreadyDragging(payload.task_id))
    );

    gesture
        .drop_on(DropTarget::UnallocatedPool)
        .expect("dragging");
    assert_eq!(gesture.cancel(), Err(TransportError::GestureFinished));
    assert_eq!(
        gesture.pick_up(payload, source),
        Err(TransportError::GestureFinished)
    );

    gesture.reset();
    assert_eq!(gesture.state(), &DragState::Idle);
}

#[rstest]
fn unallocated_pool_filters_unassigned_tasks() {
    let assigned = Task::new("Assigned", ProjectId::new(), Hours::from_whole(1), &DefaultClock)
        .expect("valid task")
        .with_assignee(EmployeeId::new());
    let pooled = Task::new("Pooled", ProjectId::new(), Hours::from_whole(1), &DefaultClock)
        .expect("valid task");
    let tasks = vec![assigned, pooled.clone()];

    let pool: Vec<_> = unallocated_pool(&tasks).collect();

    assert_eq!(pool, vec![&pooled]);
}
