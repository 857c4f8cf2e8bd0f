//! Tasks domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TASK_POINTS, MIN_NAME_LEN, MIN_TASK_POINTS};
use crate::errors::{Result, ValidationError};

/// Domain model representing a point-valued task.
///
/// `points` is fixed at creation/edit time and does not change when the
/// completion flag toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub points: i32,
    pub completed: bool,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new task.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub points: i32,
    pub category_id: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTask {
    /// Validates the new task data against the form field constraints.
    pub fn validate(&self) -> Result<()> {
        validate_task_fields(&self.name, self.points, &self.category_id)
    }
}

/// Input model for updating an existing task.
///
/// Completion is toggled through `TaskService::set_completed`, not here.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub id: String,
    pub name: String,
    pub points: i32,
    pub category_id: String,
}

impl TaskUpdate {
    /// Validates the task update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        validate_task_fields(&self.name, self.points, &self.category_id)
    }
}

/// Store-side filters for listing tasks. The hosted store evaluates these;
/// no filtering happens locally.
#[derive(Debug, Clone, Default)]
pub struct TaskFilters {
    pub completed: Option<bool>,
    pub category_id: Option<String>,
    /// Case-insensitive substring match on the task name.
    pub search: Option<String>,
}

fn validate_task_fields(name: &str, points: i32, category_id: &str) -> Result<()> {
    if name.trim().len() < MIN_NAME_LEN {
        return Err(ValidationError::InvalidInput(format!(
            "Task name must be at least {} characters",
            MIN_NAME_LEN
        ))
        .into());
    }
    if !(MIN_TASK_POINTS..=MAX_TASK_POINTS).contains(&points) {
        return Err(ValidationError::OutOfRange {
            field: "points",
            min: MIN_TASK_POINTS,
            max: MAX_TASK_POINTS,
        }
        .into());
    }
    if category_id.trim().is_empty() {
        return Err(ValidationError::MissingField("categoryId".to_string()).into());
    }
    Ok(())
}
