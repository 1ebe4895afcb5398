//! Validated problem instances.
//!
//! A `Problem` can only be obtained through validation, so the search never
//! sees capacities or targets it cannot work with. Validation uses
//! Stillwater's `Validation` type so a caller learns about every broken rule
//! at once.
//!
//! # Example
//!
//! ```rust
//! use twojug::problem::{Problem, ProblemError};
//!
//! let problem = Problem::new(4, 3, 2).unwrap();
//! assert_eq!(problem.target(), 2);
//!
//! let errors = Problem::new(6, 4, 8).unwrap_err();
//! assert!(matches!(errors[0], ProblemError::TargetExceedsCapacities { .. }));
//! ```

pub mod error;
pub mod rules;

pub use error::ProblemError;

use crate::core::{Capacities, JugState, Volume};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Capacities and target amount that passed validation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Problem {
    capacities: Capacities,
    target: Volume,
}

impl Problem {
    /// Validate raw inputs, accumulating every violation.
    ///
    /// A negative capacity is accepted when the other bucket has room; it is
    /// stored as zero since such a bucket can never receive water either way.
    pub fn validate(
        x_capacity: i64,
        y_capacity: i64,
        target: i64,
    ) -> Validation<Problem, NonEmptyVec<ProblemError>> {
        rules::check_all(x_capacity, y_capacity, target).map(|_| Problem {
            capacities: Capacities::new(clamp_volume(x_capacity), clamp_volume(y_capacity)),
            target: clamp_volume(target),
        })
    }

    /// Validate raw inputs into a `Result`.
    pub fn new(
        x_capacity: i64,
        y_capacity: i64,
        target: i64,
    ) -> Result<Problem, Vec<ProblemError>> {
        match Self::validate(x_capacity, y_capacity, target) {
            Validation::Success(problem) => Ok(problem),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }

    pub fn capacities(&self) -> Capacities {
        self.capacities
    }

    pub fn target(&self) -> Volume {
        self.target
    }

    /// Check if `state` ends the search successfully (pure).
    pub fn is_solution(&self, state: &JugState) -> bool {
        state.holds(self.target)
    }
}

fn clamp_volume(value: i64) -> Volume {
    Volume::try_from(value).unwrap_or(0)
}
