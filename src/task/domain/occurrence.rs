//! Per-occurrence overrides for recurring tasks.

use super::{Hours, Task, TaskId};
use crate::roster::domain::EmployeeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Base values captured when an occurrence is first overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceSnapshot {
    /// Estimated effort at capture time.
    pub estimated_time: Hours,
    /// Assignee at capture time.
    pub assigned_employee_id: Option<EmployeeId>,
}

/// Assignee replacement stored in an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "employee_id", rename_all = "snake_case")]
pub enum AssigneeOverride {
    /// The occurrence is moved to the unallocated pool.
    Unassigned,
    /// The occurrence is handled by this employee.
    Employee(EmployeeId),
}

impl AssigneeOverride {
    /// Converts an optional assignee into an override value.
    #[must_use]
    pub const fn from_option(employee_id: Option<EmployeeId>) -> Self {
        match employee_id {
            Some(id) => Self::Employee(id),
            None => Self::Unassigned,
        }
    }

    /// Returns the assignee this override resolves to.
    #[must_use]
    pub const fn employee_id(self) -> Option<EmployeeId> {
        match self {
            Self::Employee(id) => Some(id),
            Self::Unassigned => None,
        }
    }
}

/// Changed fields of one occurrence. Absent fields fall back to the base
/// task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceOverride {
    /// Replacement effort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<Hours>,
    /// Replacement assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<AssigneeOverride>,
    /// Day the occurrence is performed on instead of its generated date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_to: Option<NaiveDate>,
}

impl OccurrenceOverride {
    /// Creates an override changing only the assignee.
    #[must_use]
    pub const fn assign(employee_id: Option<EmployeeId>) -> Self {
        Self {
            estimated_time: None,
            assignee: Some(AssigneeOverride::from_option(employee_id)),
            moved_to: None,
        }
    }

    /// Creates an override changing only the effort.
    #[must_use]
    pub const fn estimate(estimated_time: Hours) -> Self {
        Self {
            estimated_time: Some(estimated_time),
            assignee: None,
            moved_to: None,
        }
    }

    /// Sets the day the occurrence moves to.
    #[must_use]
    pub const fn moved_to(mut self, date: NaiveDate) -> Self {
        self.moved_to = Some(date);
        self
    }

    /// Returns whether no field is overridden.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.estimated_time.is_none() && self.assignee.is_none() && self.moved_to.is_none()
    }

    /// Overwrites fields present in `patch`, keeping the rest.
    pub const fn merge(&mut self, patch: &Self) {
        if let Some(hours) = patch.estimated_time {
            self.estimated_time = Some(hours);
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = Some(assignee);
        }
        if let Some(date) = patch.moved_to {
            self.moved_to = Some(date);
        }
    }
}

/// Stored exception for one occurrence of a recurring task.
///
/// Keyed by the task and the date the recurrence rule generated. The
/// `original` snapshot is captured once on creation and never changes, so an
/// override can always be diffed against the values it replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableOccurrence {
    task_id: TaskId,
    date: NaiveDate,
    original: OccurrenceSnapshot,
    #[serde(rename = "override")]
    changes: OccurrenceOverride,
    is_removed: bool,
}

impl EditableOccurrence {
    /// Starts an override for `date`, capturing the task's current values.
    #[must_use]
    pub const fn capture(task: &Task, date: NaiveDate) -> Self {
        Self {
            task_id: task.id(),
            date,
            original: OccurrenceSnapshot {
                estimated_time: task.estimated_time(),
                assigned_employee_id: task.assigned_employee_id(),
            },
            changes: OccurrenceOverride {
                estimated_time: None,
                assignee: None,
                moved_to: None,
            },
            is_removed: false,
        }
    }

    /// Reconstructs an override from persisted parts.
    #[must_use]
    pub const fn from_parts(
        task_id: TaskId,
        date: NaiveDate,
        original: OccurrenceSnapshot,
        changes: OccurrenceOverride,
        is_removed: bool,
    ) -> Self {
        Self {
            task_id,
            date,
            original,
            changes,
            is_removed,
        }
    }

    /// Returns the task this override belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the generated occurrence date this override is keyed by.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the snapshot captured on creation.
    #[must_use]
    pub const fn original(&self) -> OccurrenceSnapshot {
        self.original
    }

    /// Returns the overridden fields.
    #[must_use]
    pub const fn changes(&self) -> &OccurrenceOverride {
        &self.changes
    }

    /// Returns whether the occurrence has been cancelled.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        self.is_removed
    }

    /// Returns the day the occurrence is performed on.
    #[must_use]
    pub fn effective_date(&self) -> NaiveDate {
        self.changes.moved_to.unwrap_or(self.date)
    }

    /// Returns whether the occurrence has been moved off its generated date.
    #[must_use]
    pub fn is_relocated(&self) -> bool {
        self.changes
            .moved_to
            .is_some_and(|target| target != self.date)
    }

    /// Applies a patch. Applying the same patch twice has no further
    /// effect.
    pub fn apply(&mut self, patch: &OccurrenceOverride) {
        self.changes.merge(patch);
        if self.changes.moved_to == Some(self.date) {
            self.changes.moved_to = None;
        }
    }

    /// Marks the occurrence as cancelled.
    pub const fn mark_removed(&mut self) {
        self.is_removed = true;
    }

    /// Brings a cancelled occurrence back.
    pub const fn restore(&mut self) {
        self.is_removed = false;
    }

    /// Returns the effort after the override, given the base value.
    #[must_use]
    pub fn effective_estimated_time(&self, base: Hours) -> Hours {
        self.changes.estimated_time.unwrap_or(base)
    }

    /// Returns the assignee after the override, given the base value.
    #[must_use]
    pub fn effective_assignee(&self, base: Option<EmployeeId>) -> Option<EmployeeId> {
        self.changes
            .assignee
            .map_or(base, AssigneeOverride::employee_id)
    }

    /// Returns only the overridden fields whose values differ from the
    /// captured snapshot.
    #[must_use]
    pub fn diff_from_original(&self) -> OccurrenceOverride {
        OccurrenceOverride {
            estimated_time: self
                .changes
                .estimated_time
                .filter(|hours| *hours != self.original.estimated_time),
            assignee: self
                .changes
                .assignee
                .filter(|assignee| assignee.employee_id() != self.original.assigned_employee_id),
            moved_to: self.changes.moved_to.filter(|target| *target != self.date),
        }
    }
}
