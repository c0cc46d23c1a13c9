//! Weekly workload reports over one-off and recurring tasks.

use chrono::Weekday;
use rstest::rstest;
use workplan::roster::domain::ProjectId;
use workplan::task::{
    domain::{DateSpan, Frequency, Hours, OccurrenceOverride, RecurrenceRule},
    services::CreateTaskRequest,
};
use workplan::workload::domain::{Band, PlanningWindow};

use super::helpers::{Planner, date, planner};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recurring_and_one_off_work_add_up_per_day(planner: Planner) -> Result<(), eyre::Report> {
    let ana = planner.hire("Ana", 40).await?;
    let project = ProjectId::new();
    planner
        .lifecycle
        .create(
            CreateTaskRequest::new("Stand-up notes", project, Hours::from_whole(4))
                .with_assignee(ana.id())
                .with_recurrence(RecurrenceRule::new(
                    date(2026, 3, 2),
                    Frequency::Weekly {
                        days: vec![Weekday::Mon, Weekday::Wed],
                    },
                )),
        )
        .await?;
    planner
        .lifecycle
        .create(
            CreateTaskRequest::new("Audit", project, Hours::from_whole(6))
                .with_assignee(ana.id())
                .with_schedule(DateSpan::single(date(2026, 3, 4))),
        )
        .await?;

    let report = planner
        .workload
        .window_report(PlanningWindow::week_of(date(2026, 3, 4))?)
        .await?;

    let monday = report.load(ana.id(), date(2026, 3, 2));
    let wednesday = report.load(ana.id(), date(2026, 3, 4));
    eyre::ensure!(monday.assigned_hours == Hours::from_whole(4), "monday load");
    eyre::ensure!(monday.band == Band::Optimal, "monday band {:?}", monday.band);
    eyre::ensure!(wednesday.assigned_hours == Hours::from_whole(10), "wednesday load");
    eyre::ensure!(wednesday.band == Band::Overloaded, "wednesday band");
    eyre::ensure!(
        report.employee_total(ana.id()) == Hours::from_whole(14),
        "weekly total"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn occurrence_edits_show_up_in_the_report(planner: Planner) -> Result<(), eyre::Report> {
    let ana = planner.hire("Ana", 40).await?;
    let task = planner
        .lifecycle
        .create(
            CreateTaskRequest::new("Backups", ProjectId::new(), Hours::from_whole(2))
                .with_assignee(ana.id())
                .with_recurrence(RecurrenceRule::new(date(2026, 3, 2), Frequency::Daily)),
        )
        .await?;
    let window = PlanningWindow::week_of(date(2026, 3, 2))?;

    planner
        .occurrences
        .edit_occurrence(
            task.id(),
            date(2026, 3, 3),
            OccurrenceOverride::estimate(Hours::from_whole(5)),
        )
        .await?;
    planner
        .occurrences
        .remove_occurrence(task.id(), date(2026, 3, 5))
        .await?;

    let report = planner.workload.window_report(window).await?;
    eyre::ensure!(
        report.load(ana.id(), date(2026, 3, 3)).assigned_hours == Hours::from_whole(5),
        "edited estimate applies to its day only"
    );
    eyre::ensure!(
        report.load(ana.id(), date(2026, 3, 5)).assigned_hours.is_zero(),
        "removed occurrence contributes nothing"
    );

    planner
        .occurrences
        .restore_occurrence(task.id(), date(2026, 3, 5))
        .await?;
    let restored = planner.workload.window_report(window).await?;
    eyre::ensure!(
        restored.load(ana.id(), date(2026, 3, 5)).assigned_hours == Hours::from_whole(2),
        "restored occurrence counts again"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unassigned_work_stays_in_the_pool(planner: Planner) -> Result<(), eyre::Report> {
    planner.hire("Ana", 40).await?;
    planner
        .lifecycle
        .create(
            CreateTaskRequest::new("Triage", ProjectId::new(), Hours::from_whole(3))
                .with_schedule(DateSpan::single(date(2026, 3, 3))),
        )
        .await?;

    let report = planner
        .workload
        .window_report(PlanningWindow::week_of(date(2026, 3, 3))?)
        .await?;

    eyre::ensure!(report.cells().is_empty(), "no employee is loaded");
    eyre::ensure!(report.unallocated().len() == 1, "one pooled instance");
    eyre::ensure!(
        report.unallocated_hours() == Hours::from_whole(3),
        "pooled hours"
    );
    Ok(())
}
