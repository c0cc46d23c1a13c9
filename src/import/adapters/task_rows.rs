//! Row processor that creates or updates tasks.

use crate::import::{
    domain::{ImportRow, ImportRowError, RowOutcome, TaskImportRecord},
    ports::RowProcessor,
};
use crate::task::{
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskLifecycleService, UpdateTaskRequest},
};
use async_trait::async_trait;
use mockable::Clock;

/// Imports rows as tasks.
///
/// Rows naming an existing task id update it; other rows create a task,
/// keeping the row's id when one is given.
#[derive(Clone)]
pub struct TaskRowProcessor<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: TaskLifecycleService<R, C>,
}

impl<R, C> TaskRowProcessor<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a processor writing through `tasks`.
    #[must_use]
    pub const fn new(tasks: TaskLifecycleService<R, C>) -> Self {
        Self { tasks }
    }

    async fn create(&self, record: TaskImportRecord) -> Result<RowOutcome, ImportRowError> {
        let project_id = record
            .project_id
            .ok_or(ImportRowError::MissingField("project_id"))?;
        let mut request = CreateTaskRequest::new(record.name, project_id, record.estimated_time);
        if let Some(id) = record.id {
            request = request.with_id(id);
        }
        if let Some(Some(employee_id)) = record.assignee {
            request = request.with_assignee(employee_id);
        }
        if let Some(schedule) = record.schedule {
            request = request.with_schedule(schedule);
        }
        if let Some(description) = record.description {
            request = request.with_description(description);
        }
        self.tasks.create(request).await?;
        Ok(RowOutcome::created())
    }
}

#[async_trait]
impl<R, C> RowProcessor for TaskRowProcessor<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    async fn process(&self, row: &ImportRow) -> Result<RowOutcome, ImportRowError> {
        let record = TaskImportRecord::from_row(row)?;
        let existing = match record.id {
            Some(id) => self.tasks.find(id).await?,
            None => None,
        };
        let Some(task) = existing else {
            return self.create(record).await;
        };

        let request = UpdateTaskRequest {
            name: Some(record.name),
            project_id: record.project_id,
            estimated_time: Some(record.estimated_time),
            assignee: record.assignee,
            schedule: record.schedule,
            description: record.description.map(Some),
        };
        self.tasks.update(task.id(), request).await?;
        Ok(RowOutcome::updated())
    }
}
