//! Service layer for task creation, editing and retrieval.

use crate::roster::domain::{EmployeeId, ProjectId};
use crate::task::{
    domain::{DateSpan, Hours, RecurrenceRule, Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    id: Option<TaskId>,
    name: String,
    project_id: ProjectId,
    estimated_time: Hours,
    assignee: Option<EmployeeId>,
    schedule: Option<DateSpan>,
    recurrence: Option<RecurrenceRule>,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(name: impl Into<String>, project_id: ProjectId, estimated_time: Hours) -> Self {
        Self {
            id: None,
            name: name.into(),
            project_id,
            estimated_time,
            assignee: None,
            schedule: None,
            recurrence: None,
            description: None,
        }
    }

    /// Uses a caller-chosen identifier instead of a fresh one.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, employee_id: EmployeeId) -> Self {
        self.assignee = Some(employee_id);
        self
    }

    /// Sets the one-off schedule.
    #[must_use]
    pub const fn with_schedule(mut self, schedule: DateSpan) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Sets the recurrence rule.
    #[must_use]
    pub fn with_recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update of an existing task. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    /// New name.
    pub name: Option<String>,
    /// New project.
    pub project_id: Option<ProjectId>,
    /// New effort.
    pub estimated_time: Option<Hours>,
    /// New assignee; `Some(None)` returns the task to the pool.
    pub assignee: Option<Option<EmployeeId>>,
    /// New one-off schedule.
    pub schedule: Option<DateSpan>,
    /// New description; `Some(None)` clears it.
    pub description: Option<Option<String>>,
}

impl UpdateTaskRequest {
    /// Returns whether the request changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.project_id.is_none()
            && self.estimated_time.is_none()
            && self.assignee.is_none()
            && self.schedule.is_none()
            && self.description.is_none()
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let id = request.id.unwrap_or_default();
        let mut task = Task::with_id(
            id,
            request.name,
            request.project_id,
            request.estimated_time,
            &*self.clock,
        )?;
        if let Some(employee_id) = request.assignee {
            task = task.with_assignee(employee_id);
        }
        if let Some(schedule) = request.schedule {
            task = task.with_schedule(schedule);
        }
        if let Some(rule) = request.recurrence {
            task = task.with_recurrence(rule);
        }
        if let Some(description) = request.description {
            task = task.with_description(description);
        }

        self.repository.store(&task).await?;
        tracing::debug!(task_id = %task.id(), recurring = task.is_recurring(), "task created");
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, domain errors for invalid values, or persistence errors.
    pub async fn update(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_or_error(id).await?;
        if request.is_empty() {
            return Ok(task);
        }
        let clock = &*self.clock;
        if let Some(name) = request.name {
            task.rename(name, clock)?;
        }
        if let Some(project_id) = request.project_id {
            task.move_to_project(project_id, clock);
        }
        if let Some(hours) = request.estimated_time {
            task.set_estimated_time(hours, clock);
        }
        if let Some(assignee) = request.assignee {
            task.assign(assignee, clock);
        }
        if let Some(schedule) = request.schedule {
            task.reschedule(schedule, clock);
        }
        if let Some(description) = request.description {
            task.set_description(description, clock);
        }

        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Deletes a task and its overrides.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not exist
    /// or persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    async fn find_or_error(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::Repository(TaskRepositoryError::NotFound(id)))
    }
}
