use std::sync::Arc;

use async_trait::async_trait;
use futures::try_join;
use log::debug;

use crate::errors::Result;
use crate::goals::goals_errors::GoalError;
use crate::goals::goals_model::{Goal, GoalFilters, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::ledger::{calculate_ledger, LedgerSummary};
use crate::tasks::{TaskFilters, TaskRepositoryTrait};

/// Service for managing goals and the one meaningful state transition in
/// the system: flipping a goal between achieved and not-achieved.
///
/// Marking a goal achieved reserves its full point cost against future
/// ledger computations; unmarking releases the reservation. The precondition
/// check reads a ledger snapshot just before the write and is deliberately
/// not wrapped in a store transaction (see `set_achieved`).
pub struct GoalService<G: GoalRepositoryTrait, T: TaskRepositoryTrait> {
    goal_repo: Arc<G>,
    task_repo: Arc<T>,
}

impl<G: GoalRepositoryTrait, T: TaskRepositoryTrait> GoalService<G, T> {
    pub fn new(goal_repo: Arc<G>, task_repo: Arc<T>) -> Self {
        GoalService {
            goal_repo,
            task_repo,
        }
    }

    async fn ledger_snapshot(&self, owner_id: &str) -> Result<LedgerSummary> {
        let task_filters = TaskFilters::default();
        let goal_filters = GoalFilters::default();
        let (tasks, goals) = try_join!(
            self.task_repo.list_tasks(owner_id, &task_filters),
            self.goal_repo.list_goals(owner_id, &goal_filters),
        )?;
        Ok(calculate_ledger(&tasks, &goals))
    }
}

#[async_trait]
impl<G: GoalRepositoryTrait, T: TaskRepositoryTrait> GoalServiceTrait for GoalService<G, T> {
    async fn get_goals(&self, owner_id: &str, filters: &GoalFilters) -> Result<Vec<Goal>> {
        self.goal_repo.list_goals(owner_id, filters).await
    }

    async fn get_goal(&self, owner_id: &str, goal_id: &str) -> Result<Goal> {
        self.goal_repo.get_goal(owner_id, goal_id).await
    }

    async fn create_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        debug!(
            "Creating goal '{}' requiring {} points",
            new_goal.name, new_goal.points_required
        );
        self.goal_repo.insert_new_goal(owner_id, new_goal).await
    }

    async fn update_goal(&self, owner_id: &str, goal_update: GoalUpdate) -> Result<Goal> {
        goal_update.validate()?;
        self.goal_repo.update_goal(owner_id, goal_update).await
    }

    /// Flips the achieved flag for a goal.
    ///
    /// Marking (false -> true) is allowed only when the available points in
    /// a ledger snapshot read just before the write cover the goal's cost.
    /// Unmarking (true -> false) is always allowed.
    ///
    /// The check-then-write sequence is not transactional: two marks issued
    /// concurrently (e.g. from two open tabs) can both pass the same
    /// snapshot. Each write is still atomic at the row level, and the ledger
    /// floors available points at zero when over-reserved.
    async fn set_achieved(&self, owner_id: &str, goal_id: &str, achieved: bool) -> Result<Goal> {
        let goal = self.goal_repo.get_goal(owner_id, goal_id).await?;

        if achieved && !goal.achieved {
            let ledger = self.ledger_snapshot(owner_id).await?;
            if ledger.available_points < i64::from(goal.points_required) {
                debug!(
                    "Rejecting achievement of goal {}: requires {}, available {}",
                    goal_id, goal.points_required, ledger.available_points
                );
                return Err(GoalError::InsufficientPoints {
                    required: goal.points_required,
                    available: ledger.available_points,
                }
                .into());
            }
        }

        self.goal_repo
            .set_achieved(owner_id, goal_id, achieved)
            .await
    }

    async fn delete_goal(&self, owner_id: &str, goal_id: &str) -> Result<usize> {
        self.goal_repo.delete_goal(owner_id, goal_id).await
    }

    async fn get_ledger(&self, owner_id: &str) -> Result<LedgerSummary> {
        self.ledger_snapshot(owner_id).await
    }
}
