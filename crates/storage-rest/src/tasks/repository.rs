use std::sync::Arc;

use async_trait::async_trait;

use questlog_core::tasks::{NewTask, Task, TaskFilters, TaskRepositoryTrait, TaskUpdate};
use questlog_core::Result;

use super::model::{CompletedChange, NewTaskRow, TaskChanges, TaskRow, TASKS_TABLE};
use crate::client::{Filter, Order, QuerySpec, RestClient};

pub struct TaskRepository {
    client: Arc<RestClient>,
}

impl TaskRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        TaskRepository { client }
    }

    fn row_spec(owner_id: &str, task_id: &str) -> QuerySpec {
        QuerySpec::for_owner(owner_id).filter(Filter::eq("id", task_id))
    }
}

#[async_trait]
impl TaskRepositoryTrait for TaskRepository {
    async fn list_tasks(&self, owner_id: &str, filters: &TaskFilters) -> Result<Vec<Task>> {
        let spec = QuerySpec::for_owner(owner_id)
            .maybe_filter(filters.completed.map(|c| Filter::eq("completed", c)))
            .maybe_filter(
                filters
                    .category_id
                    .as_deref()
                    .map(|c| Filter::eq("category_id", c)),
            )
            .maybe_filter(filters.search.as_deref().map(|s| Filter::contains("name", s)))
            .order(Order::desc("created_at"));
        let rows = self.client.select::<TaskRow>(TASKS_TABLE, &spec).await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn get_task(&self, owner_id: &str, task_id: &str) -> Result<Task> {
        let row = self
            .client
            .select_one::<TaskRow>(TASKS_TABLE, &Self::row_spec(owner_id, task_id))
            .await?;
        Ok(Task::from(row))
    }

    async fn insert_new_task(&self, owner_id: &str, new_task: NewTask) -> Result<Task> {
        let payload = NewTaskRow::from_domain(owner_id, new_task);
        let row = self
            .client
            .insert::<TaskRow, _>(TASKS_TABLE, &payload)
            .await?;
        Ok(Task::from(row))
    }

    async fn update_task(&self, owner_id: &str, task_update: TaskUpdate) -> Result<Task> {
        let spec = Self::row_spec(owner_id, &task_update.id);
        let changes = TaskChanges::from(task_update);
        let row = self
            .client
            .update::<TaskRow, _>(TASKS_TABLE, &spec, &changes)
            .await?;
        Ok(Task::from(row))
    }

    async fn set_completed(&self, owner_id: &str, task_id: &str, completed: bool) -> Result<Task> {
        let row = self
            .client
            .update::<TaskRow, _>(
                TASKS_TABLE,
                &Self::row_spec(owner_id, task_id),
                &CompletedChange { completed },
            )
            .await?;
        Ok(Task::from(row))
    }

    async fn delete_task(&self, owner_id: &str, task_id: &str) -> Result<usize> {
        self.client
            .delete(TASKS_TABLE, &Self::row_spec(owner_id, task_id))
            .await
    }

    async fn count_tasks_for_category(&self, owner_id: &str, category_id: &str) -> Result<usize> {
        let spec = QuerySpec::for_owner(owner_id).filter(Filter::eq("category_id", category_id));
        let rows = self.client.select::<TaskRow>(TASKS_TABLE, &spec).await?;
        Ok(rows.len())
    }
}
