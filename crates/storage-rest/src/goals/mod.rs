mod model;
mod repository;

pub use model::{GoalRow, NewGoalRow, GOALS_TABLE};
pub use repository::GoalRepository;
