use std::sync::Arc;

use async_trait::async_trait;
use futures::try_join;

use crate::dashboard::dashboard_model::DashboardSummary;
use crate::errors::Result;
use crate::goals::{Goal, GoalFilters, GoalRepositoryTrait};
use crate::ledger::{reserved_points, total_earned_points};
use crate::tasks::{Task, TaskFilters, TaskRepositoryTrait};

/// Derives the overview panel's numbers from already-fetched rows.
///
/// Pure companion to `calculate_ledger`: same inputs, counting instead of
/// per-goal figures.
pub fn summarize(tasks: &[Task], goals: &[Goal]) -> DashboardSummary {
    let total_earned = total_earned_points(tasks);
    let reserved = reserved_points(goals);

    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|task| task.completed).count();
    let achieved_goals = goals.iter().filter(|goal| goal.achieved).count();

    let completion_percentage = if total_tasks > 0 {
        ((completed_tasks as f64 / total_tasks as f64) * 100.0).round() as u32
    } else {
        0
    };

    DashboardSummary {
        available_points: (total_earned - reserved).max(0),
        reserved_points: reserved,
        completed_tasks,
        total_tasks,
        active_tasks: total_tasks - completed_tasks,
        achieved_goals,
        completion_percentage,
    }
}

/// Trait for dashboard service operations.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn get_summary(&self, owner_id: &str) -> Result<DashboardSummary>;
}

/// Service backing the overview panel: one full re-fetch, one summary.
pub struct DashboardService<T: TaskRepositoryTrait, G: GoalRepositoryTrait> {
    task_repo: Arc<T>,
    goal_repo: Arc<G>,
}

impl<T: TaskRepositoryTrait, G: GoalRepositoryTrait> DashboardService<T, G> {
    pub fn new(task_repo: Arc<T>, goal_repo: Arc<G>) -> Self {
        DashboardService {
            task_repo,
            goal_repo,
        }
    }
}

#[async_trait]
impl<T: TaskRepositoryTrait, G: GoalRepositoryTrait> DashboardServiceTrait
    for DashboardService<T, G>
{
    async fn get_summary(&self, owner_id: &str) -> Result<DashboardSummary> {
        let task_filters = TaskFilters::default();
        let goal_filters = GoalFilters::default();
        let (tasks, goals) = try_join!(
            self.task_repo.list_tasks(owner_id, &task_filters),
            self.goal_repo.list_goals(owner_id, &goal_filters),
        )?;
        Ok(summarize(&tasks, &goals))
    }
}
