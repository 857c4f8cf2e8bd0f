//! Points-ledger derivation.
//!
//! A pure mapping from the task and goal rows of one owner to the derived
//! quantities every presentation surface renders. No state is kept between
//! calls and identical inputs always produce identical output; mutation
//! flows write to the store and then recompute from scratch.
//!
//! Malformed rows (negative points, zero requirements) are not defensively
//! checked here; the mutation layer validates field constraints before
//! anything reaches the store.

use crate::goals::Goal;
use crate::ledger::ledger_model::{GoalProgress, GoalStatus, LedgerSummary};
use crate::tasks::Task;

/// Sum of `points` over all completed tasks.
pub fn total_earned_points(tasks: &[Task]) -> i64 {
    tasks
        .iter()
        .filter(|task| task.completed)
        .map(|task| i64::from(task.points))
        .sum()
}

/// Sum of `points_required` over all achieved goals.
pub fn reserved_points(goals: &[Goal]) -> i64 {
    goals
        .iter()
        .filter(|goal| goal.achieved)
        .map(|goal| i64::from(goal.points_required))
        .sum()
}

/// Derives the full ledger for one owner from already-fetched rows.
///
/// Input order of `tasks` is irrelevant; `per_goal` preserves the order of
/// `goals`. Reserved points may transiently exceed earned points (concurrent
/// achievement toggles, un-completed tasks that funded an achieved goal);
/// available points are floored at zero rather than going negative, and
/// achieved goals keep their frozen figures either way.
pub fn calculate_ledger(tasks: &[Task], goals: &[Goal]) -> LedgerSummary {
    let total_earned = total_earned_points(tasks);
    let reserved = reserved_points(goals);
    let available = (total_earned - reserved).max(0);

    let per_goal = goals
        .iter()
        .map(|goal| goal_progress(goal, available))
        .collect();

    LedgerSummary {
        total_earned_points: total_earned,
        reserved_points: reserved,
        available_points: available,
        per_goal,
    }
}

/// Derives the progress figures for a single goal given the current
/// available points.
pub fn goal_progress(goal: &Goal, available_points: i64) -> GoalProgress {
    let required = i64::from(goal.points_required);

    let (display_points, progress_percentage) = if goal.achieved {
        // Frozen at the moment of achievement.
        (required, 100)
    } else {
        let display = available_points.min(required);
        let percentage = ((available_points as f64 / required as f64) * 100.0).round() as u32;
        (display, percentage.min(100))
    };

    let status = if goal.achieved {
        GoalStatus::Completed
    } else if display_points > 0 {
        GoalStatus::InProgress
    } else {
        GoalStatus::NotStarted
    };

    GoalProgress {
        goal_id: goal.id.clone(),
        display_points,
        progress_percentage,
        status,
    }
}
