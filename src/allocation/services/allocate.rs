//! Resolves drops against fresh repository data and persists the result.

use crate::allocation::domain::{
    AllocationDecision, AllocationRequest, DragPayload, RejectionReason, ResolutionState,
    TaskMutation, TransportEvent, resolve,
};
use crate::roster::ports::{EmployeeRepository, RosterRepositoryError};
use crate::task::{
    domain::{EditableOccurrence, Task},
    ports::{OccurrenceRepository, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for allocation. Stored data is unchanged when one
/// is returned.
#[derive(Debug, Error)]
pub enum AllocationServiceError {
    /// Reading or writing tasks failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Reading the roster failed.
    #[error(transparent)]
    Roster(#[from] RosterRepositoryError),
}

/// Result type for allocation service operations.
pub type AllocationServiceResult<T> = Result<T, AllocationServiceError>;

/// Why nothing was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The drop was refused.
    Rejected(RejectionReason),
    /// The drag ended outside every target.
    DroppedOutside(DragPayload),
}

/// What an allocation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// The base task was updated.
    TaskUpdated(Task),
    /// An occurrence override was stored.
    OccurrenceUpdated(EditableOccurrence),
    /// Nothing changed.
    Discarded(DiscardReason),
}

/// Applies drag-and-drop requests to the repositories.
#[derive(Clone)]
pub struct AllocationService<T, E, C>
where
    T: TaskRepository + OccurrenceRepository,
    E: EmployeeRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    employees: Arc<E>,
    clock: Arc<C>,
}

impl<T, E, C> AllocationService<T, E, C>
where
    T: TaskRepository + OccurrenceRepository,
    E: EmployeeRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new allocation service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, employees: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            employees,
            clock,
        }
    }

    /// Dispatches the outcome of a finished drag gesture.
    ///
    /// # Errors
    ///
    /// Same as [`AllocationService::allocate`].
    pub async fn handle(&self, event: TransportEvent) -> AllocationServiceResult<AllocationOutcome> {
        match event {
            TransportEvent::Allocate(request) => self.allocate(request).await,
            TransportEvent::Discarded(payload) => {
                tracing::debug!(task_id = %payload.task_id, "drag ended outside any target");
                Ok(AllocationOutcome::Discarded(DiscardReason::DroppedOutside(
                    payload,
                )))
            }
        }
    }

    /// Resolves `request` and stores the resulting change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task no
    /// longer exists, or any repository failure.
    pub async fn allocate(
        &self,
        request: AllocationRequest,
    ) -> AllocationServiceResult<AllocationOutcome> {
        let task = self
            .tasks
            .find_by_id(request.task_id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(request.task_id))?;
        let occurrence = match request.source_date {
            Some(date) if task.is_recurring() => {
                self.tasks.find_occurrence(task.id(), date).await?
            }
            _ => None,
        };
        let employees = self.employees.list_employees().await?;

        let state = ResolutionState {
            task: &task,
            occurrence: occurrence.as_ref(),
            employees: &employees,
        };
        match resolve(&state, &request) {
            AllocationDecision::BaseTaskMutation(mutation) => {
                let updated = self.apply_mutation(task, mutation).await?;
                Ok(AllocationOutcome::TaskUpdated(updated))
            }
            AllocationDecision::OverrideUpsert(occurrence) => {
                self.tasks.upsert_occurrence(&occurrence).await?;
                tracing::debug!(
                    task_id = %occurrence.task_id(),
                    date = %occurrence.date(),
                    moved_to = ?occurrence.changes().moved_to,
                    "occurrence reallocated"
                );
                Ok(AllocationOutcome::OccurrenceUpdated(occurrence))
            }
            AllocationDecision::Rejected(reason) => {
                tracing::warn!(task_id = %request.task_id, %reason, "drop rejected");
                Ok(AllocationOutcome::Discarded(DiscardReason::Rejected(reason)))
            }
        }
    }

    async fn apply_mutation(
        &self,
        mut task: Task,
        mutation: TaskMutation,
    ) -> AllocationServiceResult<Task> {
        let clock = &*self.clock;
        if task.assigned_employee_id() != mutation.assignee {
            task.assign(mutation.assignee, clock);
        }
        if let Some(schedule) = mutation.schedule
            && task.schedule() != Some(schedule)
        {
            task.reschedule(schedule, clock);
        }
        self.tasks.update(&task).await?;
        tracing::debug!(
            task_id = %task.id(),
            assignee = ?task.assigned_employee_id(),
            "task reallocated"
        );
        Ok(task)
    }
}
