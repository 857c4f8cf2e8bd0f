use async_trait::async_trait;

use crate::errors::Result;
use crate::tasks::tasks_model::{NewTask, Task, TaskFilters, TaskUpdate};

/// Trait for task repository operations.
///
/// Every operation is scoped by the owner identifier supplied by the
/// identity collaborator; writes must match both (id, owner) or report
/// not-found.
#[async_trait]
pub trait TaskRepositoryTrait: Send + Sync {
    async fn list_tasks(&self, owner_id: &str, filters: &TaskFilters) -> Result<Vec<Task>>;
    async fn get_task(&self, owner_id: &str, task_id: &str) -> Result<Task>;
    async fn insert_new_task(&self, owner_id: &str, new_task: NewTask) -> Result<Task>;
    async fn update_task(&self, owner_id: &str, task_update: TaskUpdate) -> Result<Task>;
    async fn set_completed(&self, owner_id: &str, task_id: &str, completed: bool) -> Result<Task>;
    async fn delete_task(&self, owner_id: &str, task_id: &str) -> Result<usize>;
    async fn count_tasks_for_category(&self, owner_id: &str, category_id: &str) -> Result<usize>;
}

/// Trait for task service operations.
#[async_trait]
pub trait TaskServiceTrait: Send + Sync {
    async fn get_tasks(&self, owner_id: &str, filters: &TaskFilters) -> Result<Vec<Task>>;
    async fn get_task(&self, owner_id: &str, task_id: &str) -> Result<Task>;
    async fn create_task(&self, owner_id: &str, new_task: NewTask) -> Result<Task>;
    async fn update_task(&self, owner_id: &str, task_update: TaskUpdate) -> Result<Task>;
    async fn set_completed(&self, owner_id: &str, task_id: &str, completed: bool) -> Result<Task>;
    async fn delete_task(&self, owner_id: &str, task_id: &str) -> Result<usize>;
}
