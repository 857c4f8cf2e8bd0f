//! Wire row types for the `goals` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use questlog_core::goals::{Goal, GoalUpdate, NewGoal};

pub const GOALS_TABLE: &str = "goals";

/// A goal row as the store returns it (snake_case columns).
#[derive(Debug, Clone, Deserialize)]
pub struct GoalRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub points_required: i32,
    pub achieved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<GoalRow> for Goal {
    fn from(row: GoalRow) -> Self {
        Goal {
            id: row.id,
            owner_id: row.user_id,
            name: row.name,
            points_required: row.points_required,
            achieved: row.achieved,
            created_at: row.created_at,
        }
    }
}

/// Insert payload for the `goals` table. New goals always start unachieved.
#[derive(Debug, Serialize)]
pub struct NewGoalRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub points_required: i32,
    pub achieved: bool,
}

impl NewGoalRow {
    pub fn from_domain(owner_id: &str, new_goal: NewGoal) -> Self {
        NewGoalRow {
            id: new_goal.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: owner_id.to_string(),
            name: new_goal.name,
            points_required: new_goal.points_required,
            achieved: false,
        }
    }
}

/// Patch payload for goal edits; the achieved flag is patched separately.
#[derive(Debug, Serialize)]
pub struct GoalChanges {
    pub name: String,
    pub points_required: i32,
}

impl From<GoalUpdate> for GoalChanges {
    fn from(update: GoalUpdate) -> Self {
        GoalChanges {
            name: update.name,
            points_required: update.points_required,
        }
    }
}

/// Patch payload for the achievement toggle.
#[derive(Debug, Serialize)]
pub struct AchievedChange {
    pub achieved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_map_user_id_to_owner_id() {
        let row = GoalRow {
            id: "g1".to_string(),
            user_id: "owner-1".to_string(),
            name: "new bicycle".to_string(),
            points_required: 500,
            achieved: false,
            created_at: Utc::now(),
        };
        let goal = Goal::from(row);
        assert_eq!(goal.owner_id, "owner-1");
        assert_eq!(goal.points_required, 500);
    }

    #[test]
    fn new_goals_start_unachieved() {
        let payload = NewGoalRow::from_domain(
            "owner-1",
            NewGoal {
                id: None,
                name: "new bicycle".to_string(),
                points_required: 500,
            },
        );
        assert!(!payload.achieved);
        assert!(!payload.id.is_empty());
    }
}
