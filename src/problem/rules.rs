//! Validation rules for problem inputs.
//!
//! Each rule is an independent check; `check_all` runs every one of them and
//! accumulates ALL violations instead of stopping at the first.

use crate::problem::error::ProblemError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single rule
pub type RuleCheck = Validation<(), NonEmptyVec<ProblemError>>;

/// At least one bucket must have a positive capacity.
pub fn some_capacity(x_capacity: i64, y_capacity: i64) -> RuleCheck {
    if x_capacity <= 0 && y_capacity <= 0 {
        Validation::fail(ProblemError::NoCapacity {
            x_capacity,
            y_capacity,
        })
    } else {
        Validation::success(())
    }
}

/// The target amount must be positive.
pub fn positive_target(target: i64) -> RuleCheck {
    if target <= 0 {
        Validation::fail(ProblemError::NonPositiveTarget { target })
    } else {
        Validation::success(())
    }
}

/// The target must fit into at least one bucket.
pub fn target_fits(x_capacity: i64, y_capacity: i64, target: i64) -> RuleCheck {
    if target > x_capacity && target > y_capacity {
        Validation::fail(ProblemError::TargetExceedsCapacities {
            target,
            x_capacity,
            y_capacity,
        })
    } else {
        Validation::success(())
    }
}

/// Run every rule, accumulating all violations.
pub fn check_all(x_capacity: i64, y_capacity: i64, target: i64) -> RuleCheck {
    let checks = vec![
        some_capacity(x_capacity, y_capacity),
        positive_target(target),
        target_fits(x_capacity, y_capacity, target),
    ];

    Validation::all_vec(checks).map(|_| ())
}
