//! When steps for allocation BDD scenarios.

use super::world::{AllocationWorld, parse_date, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use workplan::allocation::domain::{
    DragGesture, DragPayload, DropTarget, SourceSurface, SurfaceKind,
};

fn drag(
    world: &mut AllocationWorld,
    payload: DragPayload,
    source: SurfaceKind,
    employee: &str,
    date: &str,
) -> Result<(), eyre::Report> {
    let target = DropTarget::DayCell {
        date: parse_date(date)?,
        employee_id: Some(world.employee(employee)?),
    };
    let mut gesture = DragGesture::new();
    gesture.pick_up(payload, SourceSurface::new(source))?;
    let event = gesture.drop_on(target)?;
    let outcome = run_async(world.allocation.handle(event)).wrap_err("handle drop")?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"the task is dragged from the pool to "{employee}" on "{date}""#)]
fn drag_from_pool(
    world: &mut AllocationWorld,
    employee: String,
    date: String,
) -> Result<(), eyre::Report> {
    let payload = DragPayload::for_task(world.task_id()?);
    drag(world, payload, SurfaceKind::UnallocatedPool, &employee, &date)
}

#[when(r#"the occurrence on "{source}" is dragged to "{employee}" on "{date}""#)]
fn drag_occurrence(
    world: &mut AllocationWorld,
    source: String,
    employee: String,
    date: String,
) -> Result<(), eyre::Report> {
    let payload = DragPayload::for_occurrence(world.task_id()?, parse_date(&source)?);
    drag(world, payload, SurfaceKind::Calendar, &employee, &date)
}
