//! Then steps for allocation BDD scenarios.

use super::world::{AllocationWorld, parse_date, run_async};
use rstest_bdd_macros::then;
use workplan::allocation::{
    domain::RejectionReason,
    services::{AllocationOutcome, DiscardReason},
};
use workplan::roster::domain::EmployeeId;
use workplan::task::{
    domain::{DateSpan, Hours},
    ports::TaskRepository,
};
use workplan::workload::domain::{Band, DayLoad, PlanningWindow};

fn day_load(
    world: &AllocationWorld,
    employee: EmployeeId,
    date: &str,
) -> Result<DayLoad, eyre::Report> {
    let day = parse_date(date)?;
    let report = run_async(world.workload.window_report(PlanningWindow::week_of(day)?))
        .map_err(|err| eyre::eyre!("workload report failed: {err}"))?;
    Ok(report.load(employee, day))
}

#[then(r#"the task is assigned to "{employee}" on "{date}""#)]
fn task_assigned(world: &AllocationWorld, employee: String, date: String) -> Result<(), eyre::Report> {
    let expected = world.employee(&employee)?;
    let day = parse_date(&date)?;
    let stored = run_async(world.tasks.find_by_id(world.task_id()?))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("task missing from repository"))?;

    if stored.assigned_employee_id() != Some(expected) {
        return Err(eyre::eyre!(
            "expected assignee {expected}, found {:?}",
            stored.assigned_employee_id()
        ));
    }
    if stored.schedule() != Some(DateSpan::single(day)) {
        return Err(eyre::eyre!(
            "expected schedule on {day}, found {:?}",
            stored.schedule()
        ));
    }
    Ok(())
}

#[then(r#""{employee}" is loaded with {hours:u16} hours on "{date}""#)]
fn employee_loaded(
    world: &AllocationWorld,
    employee: String,
    hours: u16,
    date: String,
) -> Result<(), eyre::Report> {
    let load = day_load(world, world.employee(&employee)?, &date)?;
    if load.assigned_hours != Hours::from_whole(hours) {
        return Err(eyre::eyre!(
            "expected {hours} hours for {employee} on {date}, found {}",
            load.assigned_hours
        ));
    }
    Ok(())
}

#[then(r#""{employee}" is overloaded on "{date}""#)]
fn employee_overloaded(
    world: &AllocationWorld,
    employee: String,
    date: String,
) -> Result<(), eyre::Report> {
    let load = day_load(world, world.employee(&employee)?, &date)?;
    if load.band != Band::Overloaded {
        return Err(eyre::eyre!(
            "expected {employee} to be overloaded on {date}, found {:?}",
            load.band
        ));
    }
    Ok(())
}

#[then("the drop is rejected because the occurrence was removed")]
fn drop_rejected_as_removed(world: &AllocationWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing allocation outcome in scenario world"))?;
    if !matches!(
        outcome,
        AllocationOutcome::Discarded(DiscardReason::Rejected(
            RejectionReason::OccurrenceRemoved(_)
        ))
    ) {
        return Err(eyre::eyre!(
            "expected removed-occurrence rejection, got {outcome:?}"
        ));
    }
    Ok(())
}
