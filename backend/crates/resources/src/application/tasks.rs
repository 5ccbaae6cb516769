//! Task Use Cases

use std::sync::Arc;

use kernel::id::TaskId;
use kernel::identity::Identity;

use crate::domain::entity::task::{NewTask, Task};
use crate::domain::repository::TaskRepository;
use crate::error::{ResourceError, ResourceResult};

pub struct TasksUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> TasksUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, identity: &Identity) -> ResourceResult<Vec<Task>> {
        self.repo.list_tasks(&identity.user_id).await
    }

    pub async fn create(&self, identity: &Identity, text: &str) -> ResourceResult<Task> {
        let new_task = NewTask::new(text)?;
        let task = self.repo.create_task(&identity.user_id, &new_task).await?;

        tracing::info!(user_id = %identity.user_id, task_id = %task.id, "Task created");
        Ok(task)
    }

    pub async fn set_completed(
        &self,
        identity: &Identity,
        raw_id: &str,
        completed: bool,
    ) -> ResourceResult<Task> {
        let id = TaskId::parse(raw_id).ok_or(ResourceError::NotFound("Task"))?;

        self.repo
            .set_task_completed(&identity.user_id, id, completed)
            .await?
            .ok_or(ResourceError::NotFound("Task"))
    }

    pub async fn delete(&self, identity: &Identity, raw_id: &str) -> ResourceResult<()> {
        let id = TaskId::parse(raw_id).ok_or(ResourceError::NotFound("Task"))?;

        if !self.repo.delete_task(&identity.user_id, id).await? {
            return Err(ResourceError::NotFound("Task"));
        }

        tracing::info!(user_id = %identity.user_id, task_id = %id, "Task deleted");
        Ok(())
    }
}
