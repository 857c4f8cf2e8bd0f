use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalFilters, GoalUpdate, NewGoal};
use crate::ledger::LedgerSummary;

/// Trait for goal repository operations.
///
/// Every operation is scoped by the owner identifier; writes must match
/// both (id, owner) or report not-found.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    async fn list_goals(&self, owner_id: &str, filters: &GoalFilters) -> Result<Vec<Goal>>;
    async fn get_goal(&self, owner_id: &str, goal_id: &str) -> Result<Goal>;
    async fn insert_new_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, owner_id: &str, goal_update: GoalUpdate) -> Result<Goal>;
    async fn set_achieved(&self, owner_id: &str, goal_id: &str, achieved: bool) -> Result<Goal>;
    async fn delete_goal(&self, owner_id: &str, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn get_goals(&self, owner_id: &str, filters: &GoalFilters) -> Result<Vec<Goal>>;
    async fn get_goal(&self, owner_id: &str, goal_id: &str) -> Result<Goal>;
    async fn create_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, owner_id: &str, goal_update: GoalUpdate) -> Result<Goal>;
    async fn set_achieved(&self, owner_id: &str, goal_id: &str, achieved: bool) -> Result<Goal>;
    async fn delete_goal(&self, owner_id: &str, goal_id: &str) -> Result<usize>;

    /// Fetches all tasks and goals for the owner and derives a fresh ledger.
    async fn get_ledger(&self, owner_id: &str) -> Result<LedgerSummary>;
}
