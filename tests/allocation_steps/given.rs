//! Given steps for allocation BDD scenarios.

use super::world::{AllocationWorld, parse_date, run_async};
use chrono::Weekday;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use workplan::roster::{
    domain::{Employee, ProjectId},
    ports::EmployeeRepository,
};
use workplan::task::{
    domain::{Frequency, Hours, RecurrenceRule},
    services::CreateTaskRequest,
};

#[given(r#"an employee "{name}" working {hours:u16} hours a week"#)]
fn employee_with_weekly_hours(
    world: &mut AllocationWorld,
    name: String,
    hours: u16,
) -> Result<(), eyre::Report> {
    let employee = Employee::new(name.clone(), Hours::from_whole(hours))?;
    run_async(world.roster.store_employee(&employee)).wrap_err("store employee")?;
    world.employees.insert(name, employee.id());
    Ok(())
}

#[given(r#"an unassigned task "{name}" estimated at {hours:u16} hours"#)]
fn unassigned_task(
    world: &mut AllocationWorld,
    name: String,
    hours: u16,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(name, ProjectId::new(), Hours::from_whole(hours));
    let task = run_async(world.lifecycle.create(request)).wrap_err("create pooled task")?;
    world.current_task = Some(task);
    Ok(())
}

#[given(
    r#"a task "{name}" for "{employee}" repeating weekly on "{days}" from "{start}" estimated at {hours:u16} hours"#
)]
fn weekly_task(
    world: &mut AllocationWorld,
    name: String,
    employee: String,
    days: String,
    start: String,
    hours: u16,
) -> Result<(), eyre::Report> {
    let weekdays = days
        .split(',')
        .map(|day| {
            day.trim()
                .parse::<Weekday>()
                .map_err(|_| eyre::eyre!("invalid weekday {day}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let rule = RecurrenceRule::new(parse_date(&start)?, Frequency::Weekly { days: weekdays });
    let request = CreateTaskRequest::new(name, ProjectId::new(), Hours::from_whole(hours))
        .with_assignee(world.employee(&employee)?)
        .with_recurrence(rule);
    let task = run_async(world.lifecycle.create(request)).wrap_err("create recurring task")?;
    if world.current_task.is_none() {
        world.current_task = Some(task);
    }
    Ok(())
}

#[given(r#"the occurrence on "{date}" has been removed"#)]
fn occurrence_removed(world: &mut AllocationWorld, date: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    run_async(
        world
            .occurrences
            .remove_occurrence(task_id, parse_date(&date)?),
    )
    .wrap_err("remove occurrence")?;
    Ok(())
}
