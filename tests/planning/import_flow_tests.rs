//! Bulk import through the task lifecycle service.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;
use workplan::import::{
    adapters::TaskRowProcessor,
    domain::{ImportPhase, ImportSession},
    services::{ImportService, read_rows},
};
use workplan::roster::domain::ProjectId;
use workplan::task::{
    adapters::memory::InMemoryTaskRepository, domain::Hours, services::TaskLifecycleService,
};
use workplan::workload::domain::PlanningWindow;

use super::helpers::{Planner, date, planner};

type TaskImporter = ImportService<TaskRowProcessor<InMemoryTaskRepository, DefaultClock>>;

fn import_service(planner: &Planner) -> TaskImporter {
    let lifecycle = TaskLifecycleService::new(Arc::clone(&planner.tasks), Arc::new(DefaultClock));
    ImportService::new(Arc::new(TaskRowProcessor::new(lifecycle)))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn imported_rows_feed_the_workload(planner: Planner) -> Result<(), eyre::Report> {
    let ana = planner.hire("Ana", 40).await?;
    let project = ProjectId::new();
    let raw = format!(
        r#"[
            {{"name": "Stocktake", "estimated_time": "6", "project_id": "{project}",
              "assigned_employee_id": "{ana}", "start_date": "2026-03-03"}},
            {{"name": "Filing", "estimated_time": 2.5, "project_id": "{project}"}},
            {{"name": "", "estimated_time": "1", "project_id": "{project}"}}
        ]"#,
        ana = ana.id(),
    );
    let service = import_service(&planner);
    let mut session = ImportSession::new();

    let summary = service.run(&mut session, read_rows(&raw)).await?;

    eyre::ensure!(summary.created == 2, "created {}", summary.created);
    eyre::ensure!(summary.errors == 1, "errors {}", summary.errors);
    eyre::ensure!(summary.total == 3, "total {}", summary.total);
    eyre::ensure!(
        matches!(session.phase(), ImportPhase::Completed(_)),
        "session completed"
    );

    let report = planner
        .workload
        .window_report(PlanningWindow::week_of(date(2026, 3, 3))?)
        .await?;
    eyre::ensure!(
        report.load(ana.id(), date(2026, 3, 3)).assigned_hours == Hours::from_whole(6),
        "imported assignment counted"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreadable_input_completes_with_a_read_failure(
    planner: Planner,
) -> Result<(), eyre::Report> {
    let service = import_service(&planner);
    let mut session = ImportSession::new();

    let summary = service.run(&mut session, read_rows("not json")).await?;

    eyre::ensure!(summary.errors == 1 && summary.total == 0, "{summary:?}");
    eyre::ensure!(!session.is_loading(), "session finished");
    Ok(())
}
