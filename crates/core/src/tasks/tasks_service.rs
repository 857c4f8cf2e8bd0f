use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::tasks::tasks_model::{NewTask, Task, TaskFilters, TaskUpdate};
use crate::tasks::tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};

/// Service for managing tasks.
///
/// Tasks are the sole producers of earned points: completing one adds its
/// point value to the ledger on the next computation, un-completing removes
/// it. Neither direction carries a precondition, so available points can
/// decrease as a side effect of an unrelated task edit; achieved goals are
/// never reconciled retroactively when that happens.
pub struct TaskService<T: TaskRepositoryTrait> {
    task_repo: Arc<T>,
}

impl<T: TaskRepositoryTrait> TaskService<T> {
    pub fn new(task_repo: Arc<T>) -> Self {
        TaskService { task_repo }
    }
}

#[async_trait]
impl<T: TaskRepositoryTrait> TaskServiceTrait for TaskService<T> {
    async fn get_tasks(&self, owner_id: &str, filters: &TaskFilters) -> Result<Vec<Task>> {
        self.task_repo.list_tasks(owner_id, filters).await
    }

    async fn get_task(&self, owner_id: &str, task_id: &str) -> Result<Task> {
        self.task_repo.get_task(owner_id, task_id).await
    }

    async fn create_task(&self, owner_id: &str, new_task: NewTask) -> Result<Task> {
        new_task.validate()?;
        debug!(
            "Creating task '{}' worth {} points",
            new_task.name, new_task.points
        );
        self.task_repo.insert_new_task(owner_id, new_task).await
    }

    async fn update_task(&self, owner_id: &str, task_update: TaskUpdate) -> Result<Task> {
        task_update.validate()?;
        self.task_repo.update_task(owner_id, task_update).await
    }

    async fn set_completed(&self, owner_id: &str, task_id: &str, completed: bool) -> Result<Task> {
        debug!("Setting task {} completed = {}", task_id, completed);
        self.task_repo
            .set_completed(owner_id, task_id, completed)
            .await
    }

    async fn delete_task(&self, owner_id: &str, task_id: &str) -> Result<usize> {
        self.task_repo.delete_task(owner_id, task_id).await
    }
}
