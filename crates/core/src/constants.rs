//! Application-wide constants.

/// Lowest point value a task may carry.
pub const MIN_TASK_POINTS: i32 = 1;

/// Highest point value a task may carry.
pub const MAX_TASK_POINTS: i32 = 1_000;

/// Lowest point requirement a goal may carry.
pub const MIN_GOAL_POINTS: i32 = 1;

/// Highest point requirement a goal may carry.
pub const MAX_GOAL_POINTS: i32 = 10_000;

/// Minimum length for task, goal, and category names.
pub const MIN_NAME_LEN: usize = 2;

/// Color assigned to a category when none is chosen.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6366f1";
