//! Dashboard domain models.

use serde::{Deserialize, Serialize};

/// The overview panel's numbers, recomputed from fetched rows on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Earned points not yet reserved by an achieved goal.
    pub available_points: i64,
    /// Points locked in by achieved goals.
    pub reserved_points: i64,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    /// Tasks still to complete.
    pub active_tasks: usize,
    pub achieved_goals: usize,
    /// round(100 * completed / total); 0 when there are no tasks.
    pub completion_percentage: u32,
}
