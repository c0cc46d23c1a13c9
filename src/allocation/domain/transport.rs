//! Drag payloads, drop targets and the requests they produce.

use super::TransportError;
use crate::roster::domain::EmployeeId;
use crate::task::domain::{Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The only item type that can be dragged.
pub const ITEM_TYPE: &str = "task";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum ItemType {
    #[default]
    #[serde(rename = "task")]
    Task,
}

/// Data carried by a drag.
///
/// Only identifiers travel with the drag; the task and its overrides are
/// re-read when the drop is resolved.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use workplan::allocation::domain::DragPayload;
/// use workplan::task::domain::TaskId;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 4).expect("valid date");
/// let payload = DragPayload::for_occurrence(TaskId::new(), date);
/// let wire = payload.to_json().expect("serializable");
/// assert!(wire.contains(r#""type":"task""#));
/// assert_eq!(DragPayload::from_json(&wire), Ok(payload));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    #[serde(rename = "type", default)]
    item_type: ItemType,
    /// Dragged task.
    pub task_id: TaskId,
    /// Generated date of the dragged occurrence, for recurring tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_date: Option<NaiveDate>,
}

impl DragPayload {
    /// Payload for dragging a whole task.
    #[must_use]
    pub const fn for_task(task_id: TaskId) -> Self {
        Self {
            item_type: ItemType::Task,
            task_id,
            source_date: None,
        }
    }

    /// Payload for dragging one occurrence of a recurring task.
    #[must_use]
    pub const fn for_occurrence(task_id: TaskId, source_date: NaiveDate) -> Self {
        Self {
            item_type: ItemType::Task,
            task_id,
            source_date: Some(source_date),
        }
    }

    /// Encodes the payload for the drag data transfer.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidPayload`] when encoding fails.
    pub fn to_json(&self) -> Result<String, TransportError> {
        serde_json::to_string(self).map_err(|err| TransportError::InvalidPayload(err.to_string()))
    }

    /// Decodes a payload received on drop.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidPayload`] for malformed JSON or item
    /// types other than [`ITEM_TYPE`].
    pub fn from_json(raw: &str) -> Result<Self, TransportError> {
        serde_json::from_str(raw).map_err(|err| TransportError::InvalidPayload(err.to_string()))
    }
}

/// Surfaces a task can be dropped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropTarget {
    /// A calendar day, optionally in an employee's row. Without an employee
    /// the assignee is kept and only the date changes.
    DayCell {
        /// Target day.
        date: NaiveDate,
        /// Target employee, if the cell belongs to one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        employee_id: Option<EmployeeId>,
    },
    /// The zone that removes the assignee.
    DeallocationZone,
    /// The unallocated pool list.
    UnallocatedPool,
}

impl DropTarget {
    /// Returns the employee the drop assigns to, if any.
    #[must_use]
    pub const fn employee_id(self) -> Option<EmployeeId> {
        match self {
            Self::DayCell { employee_id, .. } => employee_id,
            Self::DeallocationZone | Self::UnallocatedPool => None,
        }
    }

    /// Returns whether the drop returns the task to the pool.
    #[must_use]
    pub const fn unassigns(self) -> bool {
        matches!(self, Self::DeallocationZone | Self::UnallocatedPool)
    }
}

/// Kind of view a drag starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// The workload calendar.
    Calendar,
    /// The unallocated pool list.
    UnallocatedPool,
    /// A plain task list.
    TaskList,
}

/// Where a drag starts and what happens if it ends without a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSurface {
    kind: SurfaceKind,
    unassign_on_cancel: bool,
}

impl SourceSurface {
    /// A surface whose cancelled drags are discarded.
    #[must_use]
    pub const fn new(kind: SurfaceKind) -> Self {
        Self {
            kind,
            unassign_on_cancel: false,
        }
    }

    /// Makes a drag that ends outside any target unassign the task.
    #[must_use]
    pub const fn unassigning_on_cancel(mut self) -> Self {
        self.unassign_on_cancel = true;
        self
    }

    /// Returns the surface kind.
    #[must_use]
    pub const fn kind(self) -> SurfaceKind {
        self.kind
    }

    /// Returns whether a cancelled drag unassigns the task.
    #[must_use]
    pub const fn unassign_on_cancel(self) -> bool {
        self.unassign_on_cancel
    }
}

/// A request to reallocate a task or one of its occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Task to reallocate.
    pub task_id: TaskId,
    /// Generated date of the occurrence, for recurring tasks.
    pub source_date: Option<NaiveDate>,
    /// Where the task was dropped.
    pub target: DropTarget,
}

impl AllocationRequest {
    /// Builds the request for dropping `payload` on `target`.
    #[must_use]
    pub const fn new(payload: DragPayload, target: DropTarget) -> Self {
        Self {
            task_id: payload.task_id,
            source_date: payload.source_date,
            target,
        }
    }
}

/// Tasks without an assignee, in input order.
pub fn unallocated_pool(tasks: &[Task]) -> impl Iterator<Item = &Task> {
    tasks
        .iter()
        .filter(|task| task.assigned_employee_id().is_none())
}
