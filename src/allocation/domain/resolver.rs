//! Decides how a drop changes the stored data.
//!
//! One-off tasks are moved by editing the base task. Recurring tasks are
//! never edited through a drop: the dragged occurrence gets an override
//! keyed by its generated date instead, so the rule and every other
//! occurrence stay untouched.

use super::{AllocationRequest, DropTarget};
use crate::roster::domain::{Employee, EmployeeId};
use crate::task::domain::{
    DateSpan, EditableOccurrence, OccurrenceOverride, RecurrenceRule, Task, TaskId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current data a request is resolved against.
///
/// Callers read it fresh from the repositories rather than trusting data
/// carried by the drag.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionState<'a> {
    /// The dragged task.
    pub task: &'a Task,
    /// Stored override of the dragged occurrence, if any.
    pub occurrence: Option<&'a EditableOccurrence>,
    /// Known employees.
    pub employees: &'a [Employee],
}

/// New values for a one-off task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMutation {
    /// Task to change.
    pub task_id: TaskId,
    /// Assignee after the drop.
    pub assignee: Option<EmployeeId>,
    /// New schedule; `None` keeps the current one.
    pub schedule: Option<DateSpan>,
}

/// Why a drop was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectionReason {
    /// The request names a different task than the state.
    #[error("request for task {requested} resolved against task {loaded}")]
    TaskMismatch {
        /// Task named by the request.
        requested: TaskId,
        /// Task that was loaded.
        loaded: TaskId,
    },
    /// A recurring task was dragged without saying which occurrence.
    #[error("dragging a recurring task requires an occurrence date")]
    OccurrenceDateRequired,
    /// The rule does not generate the source date.
    #[error("{0} is not an occurrence of the task")]
    NotAnOccurrence(NaiveDate),
    /// The source occurrence has been cancelled.
    #[error("occurrence on {0} has been removed")]
    OccurrenceRemoved(NaiveDate),
    /// The target employee is not on the roster.
    #[error("unknown employee {0}")]
    UnknownEmployee(EmployeeId),
}

/// Outcome of resolving a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationDecision {
    /// Change the base task.
    BaseTaskMutation(TaskMutation),
    /// Store this override for the dragged occurrence.
    OverrideUpsert(EditableOccurrence),
    /// Leave everything unchanged.
    Rejected(RejectionReason),
}

/// Resolves `request` against `state`.
///
/// Capacity is never checked: allocation is advisory and overloads are
/// only reported by the workload aggregator.
#[must_use]
pub fn resolve(state: &ResolutionState<'_>, request: &AllocationRequest) -> AllocationDecision {
    if let Err(reason) = check(state, request) {
        return AllocationDecision::Rejected(reason);
    }
    match state.task.recurrence() {
        None => AllocationDecision::BaseTaskMutation(base_mutation(state.task, request.target)),
        Some(rule) => resolve_occurrence(state, rule, request)
            .map_or_else(AllocationDecision::Rejected, AllocationDecision::OverrideUpsert),
    }
}

fn check(state: &ResolutionState<'_>, request: &AllocationRequest) -> Result<(), RejectionReason> {
    if request.task_id != state.task.id() {
        return Err(RejectionReason::TaskMismatch {
            requested: request.task_id,
            loaded: state.task.id(),
        });
    }
    if let Some(employee_id) = request.target.employee_id()
        && !state
            .employees
            .iter()
            .any(|employee| employee.id() == employee_id)
    {
        return Err(RejectionReason::UnknownEmployee(employee_id));
    }
    Ok(())
}

fn base_mutation(task: &Task, target: DropTarget) -> TaskMutation {
    match target {
        DropTarget::DayCell { date, employee_id } => TaskMutation {
            task_id: task.id(),
            assignee: employee_id.or(task.assigned_employee_id()),
            schedule: Some(DateSpan::single(date)),
        },
        DropTarget::DeallocationZone | DropTarget::UnallocatedPool => TaskMutation {
            task_id: task.id(),
            assignee: None,
            schedule: None,
        },
    }
}

fn resolve_occurrence(
    state: &ResolutionState<'_>,
    rule: &RecurrenceRule,
    request: &AllocationRequest,
) -> Result<EditableOccurrence, RejectionReason> {
    let source_date = request
        .source_date
        .ok_or(RejectionReason::OccurrenceDateRequired)?;
    if !rule.occurs_on(source_date) {
        return Err(RejectionReason::NotAnOccurrence(source_date));
    }
    let existing = state.occurrence.filter(|occurrence| {
        occurrence.task_id() == state.task.id() && occurrence.date() == source_date
    });
    if existing.is_some_and(EditableOccurrence::is_removed) {
        return Err(RejectionReason::OccurrenceRemoved(source_date));
    }

    let mut occurrence = existing
        .cloned()
        .unwrap_or_else(|| EditableOccurrence::capture(state.task, source_date));
    occurrence.apply(&occurrence_patch(request.target));
    Ok(occurrence)
}

fn occurrence_patch(target: DropTarget) -> OccurrenceOverride {
    match target {
        DropTarget::DayCell { date, employee_id } => employee_id
            .map_or_else(OccurrenceOverride::default, |id| {
                OccurrenceOverride::assign(Some(id))
            })
            .moved_to(date),
        DropTarget::DeallocationZone | DropTarget::UnallocatedPool => {
            OccurrenceOverride::assign(None)
        }
    }
}
