//! Goals domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_GOAL_POINTS, MIN_GOAL_POINTS, MIN_NAME_LEN};
use crate::errors::{Result, ValidationError};

/// Domain model representing a goal.
///
/// `points_required` is frozen once the goal is achieved: the achieved flag
/// reserves exactly that many earned points until it is unmarked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub points_required: i32,
    pub achieved: bool,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub points_required: i32,
}

impl NewGoal {
    /// Validates the new goal data against the form field constraints.
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(&self.name, self.points_required)
    }
}

/// Input model for updating an existing goal.
///
/// The UI only offers editing while the goal is not yet achieved; the core
/// does not re-enforce that rule. The achieved flag is toggled through
/// `GoalService::set_achieved`, not here.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub name: String,
    pub points_required: i32,
}

impl GoalUpdate {
    /// Validates the goal update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        validate_goal_fields(&self.name, self.points_required)
    }
}

/// Store-side filters for listing goals.
#[derive(Debug, Clone, Default)]
pub struct GoalFilters {
    pub achieved: Option<bool>,
    /// Case-insensitive substring match on the goal name.
    pub search: Option<String>,
}

fn validate_goal_fields(name: &str, points_required: i32) -> Result<()> {
    if name.trim().len() < MIN_NAME_LEN {
        return Err(ValidationError::InvalidInput(format!(
            "Goal name must be at least {} characters",
            MIN_NAME_LEN
        ))
        .into());
    }
    if !(MIN_GOAL_POINTS..=MAX_GOAL_POINTS).contains(&points_required) {
        return Err(ValidationError::OutOfRange {
            field: "pointsRequired",
            min: MIN_GOAL_POINTS,
            max: MAX_GOAL_POINTS,
        }
        .into());
    }
    Ok(())
}
