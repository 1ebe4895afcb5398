//! Steps and the search path.
//!
//! A `Path` is the stack of steps leading from the origin to the active
//! state. Unlike an append-only history it is mutated in place: the search
//! pushes a step when it descends and pops it when it backtracks.

use super::action::Action;
use super::state::JugState;
use serde::{Deserialize, Serialize};

/// Record of one applied action.
///
/// # Example
///
/// ```rust
/// use twojug::core::{Action, JugState, Step};
///
/// let step = Step {
///     from: JugState::ORIGIN,
///     to: JugState::new(0, 3),
///     action: Action::FillY,
/// };
/// assert_eq!(step.action.title(), "Fill bucket Y");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Step {
    /// The state before the action
    pub from: JugState,
    /// The state after the action
    pub to: JugState,
    /// The action that was applied
    pub action: Action,
}

/// Ordered steps from the origin to the current state.
///
/// # Example
///
/// ```rust
/// use twojug::core::{Action, JugState, Path, Step};
///
/// let mut path = Path::new();
/// path.push(Step {
///     from: JugState::ORIGIN,
///     to: JugState::new(4, 0),
///     action: Action::FillX,
/// });
///
/// assert_eq!(path.len(), 1);
/// assert_eq!(path.current(), JugState::new(4, 0));
/// assert!(path.visits(&JugState::ORIGIN));
/// assert!(path.visits(&JugState::new(4, 0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn pop(&mut self) -> Option<Step> {
        self.steps.pop()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The state the path ends in; the origin for an empty path.
    pub fn current(&self) -> JugState {
        self.steps.last().map_or(JugState::ORIGIN, |step| step.to)
    }

    /// Check if `state` already occurs anywhere on the path, origin included.
    pub fn visits(&self, state: &JugState) -> bool {
        state.is_origin() || self.steps.iter().any(|step| step.to == *state)
    }

    /// States traversed, starting with the origin.
    pub fn states(&self) -> impl Iterator<Item = JugState> + '_ {
        std::iter::once(JugState::ORIGIN).chain(self.steps.iter().map(|step| step.to))
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
