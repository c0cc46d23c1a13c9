//! Service layer for editing single occurrences of recurring tasks.

use crate::task::{
    domain::{EditableOccurrence, OccurrenceOverride, Task, TaskDomainError, TaskId},
    ports::{OccurrenceRepository, TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for occurrence editing.
#[derive(Debug, Error)]
pub enum OccurrenceServiceError {
    /// The request does not address a valid occurrence.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for occurrence service operations.
pub type OccurrenceServiceResult<T> = Result<T, OccurrenceServiceError>;

/// Edits, cancels and restores occurrences without touching the
/// recurrence rule.
#[derive(Clone)]
pub struct OccurrenceService<R>
where
    R: TaskRepository + OccurrenceRepository,
{
    repository: Arc<R>,
}

impl<R> OccurrenceService<R>
where
    R: TaskRepository + OccurrenceRepository,
{
    /// Creates a new occurrence service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Overrides fields of the occurrence generated on `date`.
    ///
    /// The first edit captures the task's current values as the override's
    /// original snapshot; later edits merge into the existing override.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotRecurring`] or
    /// [`TaskDomainError::NotAnOccurrence`] (wrapped) when `date` is not an
    /// occurrence of the task, and repository errors otherwise.
    pub async fn edit_occurrence(
        &self,
        task_id: TaskId,
        date: NaiveDate,
        patch: OccurrenceOverride,
    ) -> OccurrenceServiceResult<EditableOccurrence> {
        let (task, existing) = self.load_occurrence(task_id, date).await?;
        let mut occurrence = existing.unwrap_or_else(|| EditableOccurrence::capture(&task, date));
        occurrence.apply(&patch);
        self.repository.upsert_occurrence(&occurrence).await?;
        tracing::debug!(%task_id, %date, "occurrence override saved");
        Ok(occurrence)
    }

    /// Cancels the occurrence generated on `date`.
    ///
    /// # Errors
    ///
    /// Same as [`OccurrenceService::edit_occurrence`].
    pub async fn remove_occurrence(
        &self,
        task_id: TaskId,
        date: NaiveDate,
    ) -> OccurrenceServiceResult<EditableOccurrence> {
        let (task, existing) = self.load_occurrence(task_id, date).await?;
        let mut occurrence = existing.unwrap_or_else(|| EditableOccurrence::capture(&task, date));
        occurrence.mark_removed();
        self.repository.upsert_occurrence(&occurrence).await?;
        tracing::debug!(%task_id, %date, "occurrence removed");
        Ok(occurrence)
    }

    /// Brings back a cancelled occurrence, keeping its other overrides.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::OccurrenceNotFound`] (wrapped) when the
    /// occurrence has no stored override.
    pub async fn restore_occurrence(
        &self,
        task_id: TaskId,
        date: NaiveDate,
    ) -> OccurrenceServiceResult<EditableOccurrence> {
        let mut occurrence = self
            .repository
            .find_occurrence(task_id, date)
            .await?
            .ok_or(TaskRepositoryError::OccurrenceNotFound { task_id, date })?;
        occurrence.restore();
        self.repository.upsert_occurrence(&occurrence).await?;
        Ok(occurrence)
    }

    /// Drops every override of the occurrence so it follows the base task
    /// again.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::OccurrenceNotFound`] (wrapped) when the
    /// occurrence has no stored override.
    pub async fn revert_occurrence(
        &self,
        task_id: TaskId,
        date: NaiveDate,
    ) -> OccurrenceServiceResult<()> {
        self.repository.delete_occurrence(task_id, date).await?;
        tracing::debug!(%task_id, %date, "occurrence reverted");
        Ok(())
    }

    /// Lists the stored overrides of a task ordered by date.
    ///
    /// # Errors
    ///
    /// Returns repository errors when the lookup fails.
    pub async fn list_exceptions(
        &self,
        task_id: TaskId,
    ) -> OccurrenceServiceResult<Vec<EditableOccurrence>> {
        Ok(self.repository.occurrences_for(task_id).await?)
    }

    async fn load_occurrence(
        &self,
        task_id: TaskId,
        date: NaiveDate,
    ) -> OccurrenceServiceResult<(Task, Option<EditableOccurrence>)> {
        let task = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(task_id))?;
        ensure_occurrence(&task, date)?;
        let existing = self.repository.find_occurrence(task_id, date).await?;
        Ok((task, existing))
    }
}

/// Checks that the task's rule generates `date`.
///
/// # Errors
///
/// Returns [`TaskDomainError::NotRecurring`] for one-off tasks and
/// [`TaskDomainError::NotAnOccurrence`] for dates outside the rule.
pub fn ensure_occurrence(task: &Task, date: NaiveDate) -> Result<(), TaskDomainError> {
    let rule = task
        .recurrence()
        .ok_or(TaskDomainError::NotRecurring(task.id()))?;
    if !rule.occurs_on(date) {
        return Err(TaskDomainError::NotAnOccurrence {
            task_id: task.id(),
            date,
        });
    }
    Ok(())
}
