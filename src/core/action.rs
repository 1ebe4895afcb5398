//! The six bucket operations.
//!
//! Each action pairs a pure precondition with a pure transform. The
//! precondition decides whether applying the action makes sense in a state;
//! the transform is only defined when it does. Declaration order is the
//! order the search tries actions in, so it is part of the contract.

use super::state::{Capacities, JugState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A legal bucket operation.
///
/// # Example
///
/// ```rust
/// use twojug::core::{Action, Capacities, JugState};
///
/// let capacities = Capacities::new(4, 3);
/// let state = JugState::new(0, 3);
///
/// assert!(Action::TransferYToX.has_sense(&state, &capacities));
/// assert_eq!(
///     Action::TransferYToX.try_apply(&state, &capacities),
///     Some(JugState::new(3, 0))
/// );
/// assert_eq!(Action::FillY.try_apply(&state, &capacities), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Action {
    FillX,
    FillY,
    EmptyX,
    EmptyY,
    TransferXToY,
    TransferYToX,
}

impl Action {
    /// All actions in search priority order.
    pub const ALL: [Action; 6] = [
        Action::FillX,
        Action::FillY,
        Action::EmptyX,
        Action::EmptyY,
        Action::TransferXToY,
        Action::TransferYToX,
    ];

    /// Number of actions.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this action in [`Action::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::FillX => 0,
            Self::FillY => 1,
            Self::EmptyX => 2,
            Self::EmptyY => 3,
            Self::TransferXToY => 4,
            Self::TransferYToX => 5,
        }
    }

    /// Inverse of [`Action::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label used in solution steps.
    pub fn title(self) -> &'static str {
        match self {
            Self::FillX => "Fill bucket X",
            Self::FillY => "Fill bucket Y",
            Self::EmptyX => "Empty bucket X",
            Self::EmptyY => "Empty bucket Y",
            Self::TransferXToY => "Transfer bucket X to bucket Y",
            Self::TransferYToX => "Transfer bucket Y to bucket X",
        }
    }

    /// Check whether the action changes anything in `state` (pure).
    pub fn has_sense(self, state: &JugState, capacities: &Capacities) -> bool {
        match self {
            Self::FillX => state.x < capacities.x,
            Self::FillY => state.y < capacities.y,
            Self::EmptyX => state.x > 0,
            Self::EmptyY => state.y > 0,
            Self::TransferXToY => state.x > 0 && state.y < capacities.y,
            Self::TransferYToX => state.y > 0 && state.x < capacities.x,
        }
    }

    /// Apply the transform without checking the precondition.
    ///
    /// Callers should check [`Action::has_sense`] first; for a state within
    /// `capacities` that passes the check the result stays within bounds.
    /// A transfer into a bucket that is already over capacity moves nothing.
    pub fn apply(self, state: &JugState, capacities: &Capacities) -> JugState {
        match self {
            Self::FillX => JugState::new(capacities.x, state.y),
            Self::FillY => JugState::new(state.x, capacities.y),
            Self::EmptyX => JugState::new(0, state.y),
            Self::EmptyY => JugState::new(state.x, 0),
            Self::TransferXToY => {
                let amount = state.x.min(capacities.y.saturating_sub(state.y));
                JugState::new(state.x - amount, state.y + amount)
            }
            Self::TransferYToX => {
                let amount = state.y.min(capacities.x.saturating_sub(state.x));
                JugState::new(state.x + amount, state.y - amount)
            }
        }
    }

    /// Apply the action if its precondition holds.
    pub fn try_apply(self, state: &JugState, capacities: &Capacities) -> Option<JugState> {
        self.has_sense(state, capacities)
            .then(|| self.apply(state, capacities))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPS: Capacities = Capacities { x: 4, y: 3 };

    #[test]
    fn actions_keep_fixed_order() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_index(i), Some(*action));
        }
        assert_eq!(Action::from_index(Action::COUNT), None);
    }

    #[test]
    fn titles_name_each_action() {
        let titles: Vec<_> = Action::ALL.iter().map(|a| a.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Fill bucket X",
                "Fill bucket Y",
                "Empty bucket X",
                "Empty bucket Y",
                "Transfer bucket X to bucket Y",
                "Transfer bucket Y to bucket X",
            ]
        );
        assert_eq!(Action::FillY.to_string(), "Fill bucket Y");
    }

    #[test]
    fn fill_requires_room() {
        assert!(Action::FillX.has_sense(&JugState::new(3, 0), &CAPS));
        assert!(!Action::FillX.has_sense(&JugState::new(4, 0), &CAPS));
        assert!(!Action::FillY.has_sense(&JugState::new(0, 3), &CAPS));

        assert_eq!(
            Action::FillX.apply(&JugState::new(1, 2), &CAPS),
            JugState::new(4, 2)
        );
        assert_eq!(
            Action::FillY.apply(&JugState::new(1, 2), &CAPS),
            JugState::new(1, 3)
        );
    }

    #[test]
    fn empty_requires_water() {
        assert!(!Action::EmptyX.has_sense(&JugState::ORIGIN, &CAPS));
        assert!(!Action::EmptyY.has_sense(&JugState::new(2, 0), &CAPS));

        assert_eq!(
            Action::EmptyX.apply(&JugState::new(2, 1), &CAPS),
            JugState::new(0, 1)
        );
        assert_eq!(
            Action::EmptyY.apply(&JugState::new(2, 1), &CAPS),
            JugState::new(2, 0)
        );
    }

    #[test]
    fn transfer_moves_only_feasible_amount() {
        // X -> Y limited by room in Y
        assert_eq!(
            Action::TransferXToY.try_apply(&JugState::new(4, 1), &CAPS),
            Some(JugState::new(2, 3))
        );
        // X -> Y limited by water in X
        assert_eq!(
            Action::TransferXToY.try_apply(&JugState::new(1, 1), &CAPS),
            Some(JugState::new(0, 2))
        );
        // Y -> X limited by room in X
        assert_eq!(
            Action::TransferYToX.try_apply(&JugState::new(3, 3), &CAPS),
            Some(JugState::new(4, 2))
        );
        assert_eq!(
            Action::TransferYToX.try_apply(&JugState::new(4, 3), &CAPS),
            None
        );
        assert_eq!(Action::TransferXToY.try_apply(&JugState::ORIGIN, &CAPS), None);
    }

    #[test]
    fn zero_capacity_bucket_never_receives_water() {
        let caps = Capacities::new(0, 5);

        assert!(!Action::FillX.has_sense(&JugState::ORIGIN, &caps));
        assert!(!Action::TransferYToX.has_sense(&JugState::new(0, 5), &caps));
        assert_eq!(
            Action::FillY.try_apply(&JugState::ORIGIN, &caps),
            Some(JugState::new(0, 5))
        );
    }

    #[test]
    fn transfer_into_overfull_bucket_moves_nothing() {
        // y = 5 exceeds capacity 3: no room left, so nothing is poured
        let overfull = JugState::new(2, 5);
        assert_eq!(Action::TransferXToY.apply(&overfull, &CAPS), overfull);

        let overfull = JugState::new(6, 1);
        assert_eq!(Action::TransferYToX.apply(&overfull, &CAPS), overfull);
    }

    #[test]
    fn sensible_actions_stay_in_bounds_and_change_state() {
        for x in 0..=CAPS.x {
            for y in 0..=CAPS.y {
                let state = JugState::new(x, y);
                for action in Action::ALL {
                    if let Some(next) = action.try_apply(&state, &CAPS) {
                        assert!(CAPS.contains(&next), "{action} from {state} -> {next}");
                        assert_ne!(next, state);
                    }
                }
            }
        }
    }
}
