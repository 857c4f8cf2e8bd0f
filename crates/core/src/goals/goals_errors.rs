use thiserror::Error;

/// Goal-specific error type.
#[derive(Debug, Error)]
pub enum GoalError {
    /// Marking a goal achieved requires the full point cost to be available
    /// at the moment of the action.
    #[error("Insufficient points: goal requires {required} but only {available} are available")]
    InsufficientPoints { required: i32, available: i64 },
}
