//! Drag-and-drop allocation feeding the workload report.

use chrono::Weekday;
use rstest::rstest;
use workplan::allocation::{
    domain::{DragGesture, DragPayload, DropTarget, SourceSurface, SurfaceKind},
    services::{AllocationOutcome, DiscardReason},
};
use workplan::roster::domain::ProjectId;
use workplan::task::{
    domain::{DateSpan, Frequency, Hours, RecurrenceRule},
    ports::{OccurrenceRepository, TaskRepository},
    services::CreateTaskRequest,
};
use workplan::workload::domain::PlanningWindow;

use super::helpers::{Planner, date, planner};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pool_task_dropped_on_a_cell_leaves_the_pool(
    planner: Planner,
) -> Result<(), eyre::Report> {
    let ana = planner.hire("Ana", 40).await?;
    let task = planner
        .lifecycle
        .create(CreateTaskRequest::new(
            "Release notes",
            ProjectId::new(),
            Hours::from_whole(3),
        ))
        .await?;

    let mut gesture = DragGesture::new();
    gesture.pick_up(
        DragPayload::for_task(task.id()),
        SourceSurface::new(SurfaceKind::UnallocatedPool),
    )?;
    let event = gesture.drop_on(DropTarget::DayCell {
        date: date(2026, 3, 3),
        employee_id: Some(ana.id()),
    })?;
    let outcome = planner.allocation.handle(event).await?;

    eyre::ensure!(
        matches!(outcome, AllocationOutcome::TaskUpdated(_)),
        "expected base task update, got {outcome:?}"
    );
    let stored = planner
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task disappeared"))?;
    eyre::ensure!(stored.assigned_employee_id() == Some(ana.id()), "assignee");
    eyre::ensure!(
        stored.schedule() == Some(DateSpan::single(date(2026, 3, 3))),
        "schedule"
    );

    let report = planner
        .workload
        .window_report(PlanningWindow::week_of(date(2026, 3, 3))?)
        .await?;
    eyre::ensure!(report.unallocated().is_empty(), "pool is empty");
    eyre::ensure!(
        report.load(ana.id(), date(2026, 3, 3)).assigned_hours == Hours::from_whole(3),
        "load moved to the cell"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_one_occurrence_leaves_the_series_alone(
    planner: Planner,
) -> Result<(), eyre::Report> {
    let ana = planner.hire("Ana", 40).await?;
    let ben = planner.hire("Ben", 40).await?;
    let task = planner
        .lifecycle
        .create(
            CreateTaskRequest::new("Invoices", ProjectId::new(), Hours::from_whole(4))
                .with_assignee(ana.id())
                .with_recurrence(RecurrenceRule::new(
                    date(2026, 3, 2),
                    Frequency::Weekly {
                        days: vec![Weekday::Mon, Weekday::Wed],
                    },
                )),
        )
        .await?;

    let mut gesture = DragGesture::new();
    gesture.pick_up(
        DragPayload::for_occurrence(task.id(), date(2026, 3, 4)),
        SourceSurface::new(SurfaceKind::Calendar),
    )?;
    let event = gesture.drop_on(DropTarget::DayCell {
        date: date(2026, 3, 5),
        employee_id: Some(ben.id()),
    })?;
    let outcome = planner.allocation.handle(event).await?;
    eyre::ensure!(
        matches!(outcome, AllocationOutcome::OccurrenceUpdated(_)),
        "expected override, got {outcome:?}"
    );

    let base = planner
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task disappeared"))?;
    eyre::ensure!(base == task, "base task untouched");
    let stored = planner
        .tasks
        .find_occurrence(task.id(), date(2026, 3, 4))
        .await?
        .ok_or_else(|| eyre::eyre!("override not stored"))?;
    eyre::ensure!(stored.effective_date() == date(2026, 3, 5), "relocated");

    let report = planner
        .workload
        .window_report(PlanningWindow::week_of(date(2026, 3, 2))?)
        .await?;
    eyre::ensure!(
        report.load(ana.id(), date(2026, 3, 4)).assigned_hours.is_zero(),
        "wednesday freed"
    );
    eyre::ensure!(
        report.load(ben.id(), date(2026, 3, 5)).assigned_hours == Hours::from_whole(4),
        "thursday booked for Ben"
    );
    eyre::ensure!(
        report.load(ana.id(), date(2026, 3, 2)).assigned_hours == Hours::from_whole(4),
        "monday unchanged"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelling_from_the_pool_changes_nothing(planner: Planner) -> Result<(), eyre::Report> {
    let task = planner
        .lifecycle
        .create(CreateTaskRequest::new(
            "Cleanup",
            ProjectId::new(),
            Hours::from_whole(1),
        ))
        .await?;

    let mut gesture = DragGesture::new();
    gesture.pick_up(
        DragPayload::for_task(task.id()),
        SourceSurface::new(SurfaceKind::UnallocatedPool),
    )?;
    let outcome = planner.allocation.handle(gesture.cancel()?).await?;

    eyre::ensure!(
        matches!(
            outcome,
            AllocationOutcome::Discarded(DiscardReason::DroppedOutside(_))
        ),
        "expected discard, got {outcome:?}"
    );
    let stored = planner
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task disappeared"))?;
    eyre::ensure!(stored == task, "task untouched");
    Ok(())
}
