//! Container-pair state and capacity bounds.
//!
//! A `JugState` is an immutable value describing how much water each bucket
//! currently holds. States are compared by value, which is what the search
//! uses for within-path cycle detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount of water, in whole units.
pub type Volume = u64;

/// Capacities of the two buckets, fixed for the duration of one search.
///
/// # Example
///
/// ```rust
/// use twojug::core::{Capacities, JugState};
///
/// let capacities = Capacities::new(4, 3);
/// assert!(capacities.contains(&JugState::new(4, 0)));
/// assert!(!capacities.contains(&JugState::new(5, 0)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Capacities {
    /// Capacity of bucket X
    pub x: Volume,
    /// Capacity of bucket Y
    pub y: Volume,
}

impl Capacities {
    pub fn new(x: Volume, y: Volume) -> Self {
        Self { x, y }
    }

    /// Check that a state respects `0 <= x <= self.x` and `0 <= y <= self.y`.
    pub fn contains(&self, state: &JugState) -> bool {
        state.x <= self.x && state.y <= self.y
    }

    /// Upper bound on the number of distinct states: `(x + 1) * (y + 1)`.
    pub fn state_space_size(&self) -> u128 {
        (u128::from(self.x) + 1) * (u128::from(self.y) + 1)
    }
}

/// Current water levels of buckets X and Y.
///
/// # Example
///
/// ```rust
/// use twojug::core::JugState;
///
/// let state = JugState::new(4, 2);
/// assert!(state.holds(2));
/// assert!(state.holds(4));
/// assert!(!state.holds(3));
/// assert!(JugState::ORIGIN.is_origin());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct JugState {
    /// Water in bucket X
    pub x: Volume,
    /// Water in bucket Y
    pub y: Volume,
}

impl JugState {
    /// Both buckets empty. Every search starts here.
    pub const ORIGIN: JugState = JugState { x: 0, y: 0 };

    pub const fn new(x: Volume, y: Volume) -> Self {
        Self { x, y }
    }

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    /// Check if either bucket holds exactly `target`.
    pub fn holds(&self, target: Volume) -> bool {
        self.x == target || self.y == target
    }
}

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
