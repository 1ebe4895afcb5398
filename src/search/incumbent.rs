//! Best solution tracking.
//!
//! The incumbent is the shortest solution seen so far in one search run. It
//! is owned by that run and never shared, so concurrent searches cannot
//! observe each other.

use crate::core::{Path, Step};

/// Slot holding the shortest solution path found so far.
///
/// # Example
///
/// ```rust
/// use twojug::core::{Action, JugState, Path, Step};
/// use twojug::search::BestSolution;
///
/// let mut best = BestSolution::new();
/// let mut path = Path::new();
/// path.push(Step { from: JugState::ORIGIN, to: JugState::new(0, 5), action: Action::FillY });
///
/// assert!(best.offer(&path));
/// assert!(!best.offer(&path)); // ties keep the first
/// assert_eq!(best.len(), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BestSolution {
    steps: Option<Vec<Step>>,
}

impl BestSolution {
    pub fn new() -> Self {
        Self { steps: None }
    }

    /// Number of steps in the incumbent, if any.
    pub fn len(&self) -> Option<usize> {
        self.steps.as_ref().map(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_none()
    }

    /// Check if a path of `len` steps would replace the incumbent (pure).
    pub fn would_improve(&self, len: usize) -> bool {
        self.len().is_none_or(|best| len < best)
    }

    /// Install a copy of `path` if it is strictly shorter than the incumbent.
    ///
    /// Returns `true` when the incumbent changed.
    pub fn offer(&mut self, path: &Path) -> bool {
        if !self.would_improve(path.len()) {
            return false;
        }
        self.steps = Some(path.steps().to_vec());
        true
    }

    pub fn steps(&self) -> Option<&[Step]> {
        self.steps.as_deref()
    }

    pub fn into_steps(self) -> Option<Vec<Step>> {
        self.steps
    }
}
