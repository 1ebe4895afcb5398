//! Input validation errors.

use thiserror::Error;

/// Reasons a problem instance is rejected before any search runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProblemError {
    #[error("No bucket can hold water (capacities {x_capacity} and {y_capacity})")]
    NoCapacity { x_capacity: i64, y_capacity: i64 },

    #[error("Target amount must be positive (got {target})")]
    NonPositiveTarget { target: i64 },

    #[error("Target {target} exceeds both capacities ({x_capacity} and {y_capacity})")]
    TargetExceedsCapacities {
        target: i64,
        x_capacity: i64,
        y_capacity: i64,
    },
}
