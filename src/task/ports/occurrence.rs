//! Repository port for per-occurrence overrides.

use super::TaskRepositoryResult;
use crate::task::domain::{EditableOccurrence, TaskId};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Occurrence override persistence contract.
///
/// Overrides are keyed by task and generated occurrence date.
#[async_trait]
pub trait OccurrenceRepository: Send + Sync {
    /// Inserts or replaces the override for its (task, date) key.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskRepositoryError::NotFound`] when the task does
    /// not exist.
    async fn upsert_occurrence(&self, occurrence: &EditableOccurrence) -> TaskRepositoryResult<()>;

    /// Deletes the override for (task, date).
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskRepositoryError::OccurrenceNotFound`] when no
    /// override is stored for the key.
    async fn delete_occurrence(&self, task_id: TaskId, date: NaiveDate)
    -> TaskRepositoryResult<()>;

    /// Finds the override for (task, date).
    async fn find_occurrence(
        &self,
        task_id: TaskId,
        date: NaiveDate,
    ) -> TaskRepositoryResult<Option<EditableOccurrence>>;

    /// Returns the overrides of one task ordered by date.
    async fn occurrences_for(&self, task_id: TaskId)
    -> TaskRepositoryResult<Vec<EditableOccurrence>>;

    /// Returns every stored override.
    async fn list_occurrences(&self) -> TaskRepositoryResult<Vec<EditableOccurrence>>;
}
