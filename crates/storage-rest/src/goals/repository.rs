use std::sync::Arc;

use async_trait::async_trait;

use questlog_core::goals::{Goal, GoalFilters, GoalRepositoryTrait, GoalUpdate, NewGoal};
use questlog_core::Result;

use super::model::{AchievedChange, GoalChanges, GoalRow, NewGoalRow, GOALS_TABLE};
use crate::client::{Filter, Order, QuerySpec, RestClient};

pub struct GoalRepository {
    client: Arc<RestClient>,
}

impl GoalRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        GoalRepository { client }
    }

    fn row_spec(owner_id: &str, goal_id: &str) -> QuerySpec {
        QuerySpec::for_owner(owner_id).filter(Filter::eq("id", goal_id))
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn list_goals(&self, owner_id: &str, filters: &GoalFilters) -> Result<Vec<Goal>> {
        let spec = QuerySpec::for_owner(owner_id)
            .maybe_filter(filters.achieved.map(|a| Filter::eq("achieved", a)))
            .maybe_filter(filters.search.as_deref().map(|s| Filter::contains("name", s)))
            .order(Order::desc("created_at"));
        let rows = self.client.select::<GoalRow>(GOALS_TABLE, &spec).await?;
        Ok(rows.into_iter().map(Goal::from).collect())
    }

    async fn get_goal(&self, owner_id: &str, goal_id: &str) -> Result<Goal> {
        let row = self
            .client
            .select_one::<GoalRow>(GOALS_TABLE, &Self::row_spec(owner_id, goal_id))
            .await?;
        Ok(Goal::from(row))
    }

    async fn insert_new_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let payload = NewGoalRow::from_domain(owner_id, new_goal);
        let row = self
            .client
            .insert::<GoalRow, _>(GOALS_TABLE, &payload)
            .await?;
        Ok(Goal::from(row))
    }

    async fn update_goal(&self, owner_id: &str, goal_update: GoalUpdate) -> Result<Goal> {
        let spec = Self::row_spec(owner_id, &goal_update.id);
        let changes = GoalChanges::from(goal_update);
        let row = self
            .client
            .update::<GoalRow, _>(GOALS_TABLE, &spec, &changes)
            .await?;
        Ok(Goal::from(row))
    }

    async fn set_achieved(&self, owner_id: &str, goal_id: &str, achieved: bool) -> Result<Goal> {
        // One atomic row write; the precondition lives in the service layer.
        let row = self
            .client
            .update::<GoalRow, _>(
                GOALS_TABLE,
                &Self::row_spec(owner_id, goal_id),
                &AchievedChange { achieved },
            )
            .await?;
        Ok(Goal::from(row))
    }

    async fn delete_goal(&self, owner_id: &str, goal_id: &str) -> Result<usize> {
        self.client
            .delete(GOALS_TABLE, &Self::row_spec(owner_id, goal_id))
            .await
    }
}
