//! Wire row types for the `tasks` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use questlog_core::tasks::{NewTask, Task, TaskUpdate};

pub const TASKS_TABLE: &str = "tasks";

/// A task row as the store returns it (snake_case columns).
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub points: i32,
    pub completed: bool,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            owner_id: row.user_id,
            name: row.name,
            points: row.points,
            completed: row.completed,
            category_id: row.category_id,
            created_at: row.created_at,
        }
    }
}

/// Insert payload for the `tasks` table.
#[derive(Debug, Serialize)]
pub struct NewTaskRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub points: i32,
    pub category_id: String,
    pub completed: bool,
}

impl NewTaskRow {
    pub fn from_domain(owner_id: &str, new_task: NewTask) -> Self {
        NewTaskRow {
            id: new_task.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: owner_id.to_string(),
            name: new_task.name,
            points: new_task.points,
            category_id: new_task.category_id,
            completed: new_task.completed,
        }
    }
}

/// Patch payload for task edits; completion is patched separately.
#[derive(Debug, Serialize)]
pub struct TaskChanges {
    pub name: String,
    pub points: i32,
    pub category_id: String,
}

impl From<TaskUpdate> for TaskChanges {
    fn from(update: TaskUpdate) -> Self {
        TaskChanges {
            name: update.name,
            points: update.points,
            category_id: update.category_id,
        }
    }
}

/// Patch payload for the completion toggle.
#[derive(Debug, Serialize)]
pub struct CompletedChange {
    pub completed: bool,
}
