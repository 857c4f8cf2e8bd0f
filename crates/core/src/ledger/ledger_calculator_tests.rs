use chrono::Utc;
use proptest::prelude::*;

use crate::goals::Goal;
use crate::ledger::{calculate_ledger, GoalStatus};
use crate::tasks::Task;

const OWNER: &str = "owner-1";

fn task(id: &str, points: i32, completed: bool) -> Task {
    Task {
        id: id.to_string(),
        owner_id: OWNER.to_string(),
        name: format!("task {}", id),
        points,
        completed,
        category_id: "cat-1".to_string(),
        created_at: Utc::now(),
    }
}

fn goal(id: &str, points_required: i32, achieved: bool) -> Goal {
    Goal {
        id: id.to_string(),
        owner_id: OWNER.to_string(),
        name: format!("goal {}", id),
        points_required,
        achieved,
        created_at: Utc::now(),
    }
}

#[test]
fn only_completed_tasks_earn_points() {
    let tasks = vec![task("t1", 50, true), task("t2", 30, false)];
    let ledger = calculate_ledger(&tasks, &[]);

    assert_eq!(ledger.total_earned_points, 50);
    assert_eq!(ledger.reserved_points, 0);
    assert_eq!(ledger.available_points, 50);
    assert!(ledger.per_goal.is_empty());
}

#[test]
fn achieved_goal_reserves_its_full_cost() {
    let tasks = vec![task("t1", 100, true)];
    let goals = vec![goal("g1", 100, true)];
    let ledger = calculate_ledger(&tasks, &goals);

    assert_eq!(ledger.total_earned_points, 100);
    assert_eq!(ledger.reserved_points, 100);
    assert_eq!(ledger.available_points, 0);

    let progress = &ledger.per_goal[0];
    assert_eq!(progress.goal_id, "g1");
    assert_eq!(progress.display_points, 100);
    assert_eq!(progress.progress_percentage, 100);
    assert_eq!(progress.status, GoalStatus::Completed);
}

#[test]
fn unmarking_releases_the_reservation() {
    // Same rows as the reservation case, goal unmarked.
    let tasks = vec![task("t1", 100, true)];
    let goals = vec![goal("g1", 100, false)];
    let ledger = calculate_ledger(&tasks, &goals);

    assert_eq!(ledger.available_points, 100);

    let progress = &ledger.per_goal[0];
    assert_eq!(progress.display_points, 100);
    assert_eq!(progress.progress_percentage, 100);
    // achieved stays false until explicitly re-marked
    assert_eq!(progress.status, GoalStatus::InProgress);
}

#[test]
fn partial_progress_is_reported_proportionally() {
    let tasks = vec![task("t1", 40, true)];
    let goals = vec![goal("g1", 100, false)];
    let ledger = calculate_ledger(&tasks, &goals);

    assert_eq!(ledger.available_points, 40);

    let progress = &ledger.per_goal[0];
    assert_eq!(progress.display_points, 40);
    assert_eq!(progress.progress_percentage, 40);
    assert_eq!(progress.status, GoalStatus::InProgress);
}

#[test]
fn goal_with_no_available_points_is_not_started() {
    let goals = vec![goal("g1", 100, false)];
    let ledger = calculate_ledger(&[], &goals);

    let progress = &ledger.per_goal[0];
    assert_eq!(progress.display_points, 0);
    assert_eq!(progress.progress_percentage, 0);
    assert_eq!(progress.status, GoalStatus::NotStarted);
}

#[test]
fn available_points_floor_at_zero_when_over_reserved() {
    // An un-completed task can leave an achieved goal with a reservation
    // that earned points no longer cover.
    let tasks = vec![task("t1", 60, true)];
    let goals = vec![goal("g1", 100, true)];
    let ledger = calculate_ledger(&tasks, &goals);

    assert_eq!(ledger.total_earned_points, 60);
    assert_eq!(ledger.reserved_points, 100);
    assert_eq!(ledger.available_points, 0);
}

#[test]
fn achieved_goal_figures_are_frozen() {
    // The achieved goal keeps reporting its own cost no matter how earned
    // points move afterwards.
    let goals = vec![goal("g1", 100, true)];

    for earned in [0, 40, 100, 500] {
        let tasks = vec![task("t1", earned, true)];
        let ledger = calculate_ledger(&tasks, &goals);
        let progress = &ledger.per_goal[0];
        assert_eq!(progress.display_points, 100);
        assert_eq!(progress.progress_percentage, 100);
        assert_eq!(progress.status, GoalStatus::Completed);
    }
}

#[test]
fn toggling_a_task_moves_earned_points_by_exactly_its_value() {
    let mut tasks = vec![task("t1", 50, true), task("t2", 30, false), task("t3", 7, true)];
    let before = calculate_ledger(&tasks, &[]).total_earned_points;

    tasks[1].completed = true;
    let after = calculate_ledger(&tasks, &[]).total_earned_points;
    assert_eq!(after - before, 30);

    tasks[0].completed = false;
    let reverted = calculate_ledger(&tasks, &[]).total_earned_points;
    assert_eq!(reverted - after, -50);
}

#[test]
fn computation_is_idempotent() {
    let tasks = vec![task("t1", 50, true), task("t2", 30, false)];
    let goals = vec![goal("g1", 20, true), goal("g2", 80, false)];

    let first = calculate_ledger(&tasks, &goals);
    let second = calculate_ledger(&tasks, &goals);
    assert_eq!(first, second);
}

#[test]
fn task_order_does_not_matter_and_goal_order_is_preserved() {
    let tasks = vec![task("t1", 10, true), task("t2", 20, true)];
    let reversed: Vec<_> = tasks.iter().rev().cloned().collect();
    let goals = vec![goal("g1", 15, false), goal("g2", 40, true)];

    let a = calculate_ledger(&tasks, &goals);
    let b = calculate_ledger(&reversed, &goals);
    assert_eq!(a, b);
    assert_eq!(a.per_goal[0].goal_id, "g1");
    assert_eq!(a.per_goal[1].goal_id, "g2");
}

proptest! {
    #[test]
    fn available_points_never_go_negative(
        task_rows in prop::collection::vec((1..=1000i32, any::<bool>()), 0..40),
        goal_rows in prop::collection::vec((1..=10000i32, any::<bool>()), 0..10),
    ) {
        let tasks: Vec<_> = task_rows
            .iter()
            .enumerate()
            .map(|(i, &(points, completed))| task(&format!("t{}", i), points, completed))
            .collect();
        let goals: Vec<_> = goal_rows
            .iter()
            .enumerate()
            .map(|(i, &(required, achieved))| goal(&format!("g{}", i), required, achieved))
            .collect();

        let ledger = calculate_ledger(&tasks, &goals);

        let earned: i64 = task_rows
            .iter()
            .filter(|(_, completed)| *completed)
            .map(|&(points, _)| i64::from(points))
            .sum();
        let reserved: i64 = goal_rows
            .iter()
            .filter(|(_, achieved)| *achieved)
            .map(|&(required, _)| i64::from(required))
            .sum();

        prop_assert_eq!(ledger.total_earned_points, earned);
        prop_assert_eq!(ledger.reserved_points, reserved);
        prop_assert_eq!(ledger.available_points, (earned - reserved).max(0));
        prop_assert!(ledger.available_points >= 0);
        prop_assert_eq!(ledger.per_goal.len(), goals.len());
    }

    #[test]
    fn per_goal_figures_stay_in_bounds(
        available_seed in 0..=20000i32,
        required in 1..=10000i32,
        achieved in any::<bool>(),
    ) {
        let tasks = vec![task("t1", available_seed.clamp(1, 1000), available_seed > 0)];
        let goals = vec![goal("g1", required, achieved)];
        let ledger = calculate_ledger(&tasks, &goals);
        let progress = &ledger.per_goal[0];

        prop_assert!(progress.progress_percentage <= 100);
        prop_assert!(progress.display_points <= i64::from(required));
        if achieved {
            prop_assert_eq!(progress.display_points, i64::from(required));
            prop_assert_eq!(progress.progress_percentage, 100);
        }
    }
}
