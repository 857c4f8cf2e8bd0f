//! Ledger module - the pure points-ledger derivation.

mod ledger_calculator;
mod ledger_model;

#[cfg(test)]
mod ledger_calculator_tests;

pub use ledger_calculator::{calculate_ledger, goal_progress, reserved_points, total_earned_points};
pub use ledger_model::{GoalProgress, GoalStatus, LedgerSummary};
