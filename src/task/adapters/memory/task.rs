//! In-memory repository for tasks and their occurrence overrides.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{EditableOccurrence, Task, TaskId},
    ports::{OccurrenceRepository, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Overrides are stored alongside their task so deleting a task drops its
/// overrides too.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    occurrences: HashMap<TaskId, BTreeMap<NaiveDate, EditableOccurrence>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let slot = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        state.occurrences.remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Ok(self.read()?.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self.read()?.tasks.values().cloned().collect();
        tasks.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(tasks)
    }
}

#[async_trait]
impl OccurrenceRepository for InMemoryTaskRepository {
    async fn upsert_occurrence(&self, occurrence: &EditableOccurrence) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.tasks.contains_key(&occurrence.task_id()) {
            return Err(TaskRepositoryError::NotFound(occurrence.task_id()));
        }
        state
            .occurrences
            .entry(occurrence.task_id())
            .or_default()
            .insert(occurrence.date(), occurrence.clone());
        Ok(())
    }

    async fn delete_occurrence(
        &self,
        task_id: TaskId,
        date: NaiveDate,
    ) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let removed = state
            .occurrences
            .get_mut(&task_id)
            .and_then(|by_date| by_date.remove(&date));
        if removed.is_none() {
            return Err(TaskRepositoryError::OccurrenceNotFound { task_id, date });
        }
        if state
            .occurrences
            .get(&task_id)
            .is_some_and(BTreeMap::is_empty)
        {
            state.occurrences.remove(&task_id);
        }
        Ok(())
    }

    async fn find_occurrence(
        &self,
        task_id: TaskId,
        date: NaiveDate,
    ) -> TaskRepositoryResult<Option<EditableOccurrence>> {
        Ok(self
            .read()?
            .occurrences
            .get(&task_id)
            .and_then(|by_date| by_date.get(&date))
            .cloned())
    }

    async fn occurrences_for(
        &self,
        task_id: TaskId,
    ) -> TaskRepositoryResult<Vec<EditableOccurrence>> {
        Ok(self
            .read()?
            .occurrences
            .get(&task_id)
            .map(|by_date| by_date.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn list_occurrences(&self) -> TaskRepositoryResult<Vec<EditableOccurrence>> {
        let state = self.read()?;
        let mut occurrences: Vec<EditableOccurrence> = state
            .occurrences
            .values()
            .flat_map(|by_date| by_date.values().cloned())
            .collect();
        occurrences.sort_by_key(|occurrence| (occurrence.task_id(), occurrence.date()));
        Ok(occurrences)
    }
}
