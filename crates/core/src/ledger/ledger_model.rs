//! Ledger domain models.
//!
//! The ledger is not stored anywhere: it is derived fresh from the task and
//! goal rows on every read.

use serde::{Deserialize, Serialize};

/// Read-time classification of a goal.
///
/// Only `achieved` is stored; the other two states are different read-time
/// views of the same `achieved = false` row, so there is no transition
/// logic here beyond what `GoalService::set_achieved` performs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Derived progress figures for a single goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    /// Points counted toward this goal. Frozen at `points_required` once the
    /// goal is achieved, regardless of later ledger changes.
    pub display_points: i64,
    /// 0..=100. Always 100 for an achieved goal.
    pub progress_percentage: u32,
    pub status: GoalStatus,
}

/// The full set of derived quantities for one owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    /// Sum of `points` over all completed tasks.
    pub total_earned_points: i64,
    /// Sum of `points_required` over all achieved goals.
    pub reserved_points: i64,
    /// Earned points not yet reserved by an achieved goal, floored at zero.
    pub available_points: i64,
    /// Per-goal figures, in goal input order.
    pub per_goal: Vec<GoalProgress>,
}
