//! Result of one search run.

use crate::core::{JugState, Step};
use crate::search::stats::SearchStats;
use crate::solution::{project, SolutionStep};
use serde::{Deserialize, Serialize};

/// Best path found by a search, together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    best: Option<Vec<Step>>,
    stats: SearchStats,
}

impl SearchOutcome {
    #[inline]
    pub fn solved(steps: Vec<Step>, stats: SearchStats) -> Self {
        Self {
            best: Some(steps),
            stats,
        }
    }

    #[inline]
    pub fn unsolvable(stats: SearchStats) -> Self {
        Self { best: None, stats }
    }

    pub fn is_solved(&self) -> bool {
        self.best.is_some()
    }

    /// Steps of the best solution, in the order they were applied.
    pub fn best(&self) -> Option<&[Step]> {
        self.best.as_deref()
    }

    /// Number of steps in the best solution.
    pub fn best_len(&self) -> Option<usize> {
        self.best.as_ref().map(Vec::len)
    }

    /// The state the best solution ends in.
    pub fn final_state(&self) -> Option<JugState> {
        self.best.as_ref()?.last().map(|step| step.to)
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Project the best solution into output records.
    pub fn solution_steps(&self) -> Option<Vec<SolutionStep>> {
        self.best.as_deref().map(project)
    }

    pub fn into_parts(self) -> (Option<Vec<Step>>, SearchStats) {
        (self.best, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    #[test]
    fn unsolvable_outcome_has_no_steps() {
        let outcome = SearchOutcome::unsolvable(SearchStats::default());

        assert!(!outcome.is_solved());
        assert_eq!(outcome.best_len(), None);
        assert_eq!(outcome.final_state(), None);
        assert!(outcome.solution_steps().is_none());
    }

    #[test]
    fn solved_outcome_exposes_final_state() {
        let steps = vec![Step {
            from: JugState::ORIGIN,
            to: JugState::new(0, 5),
            action: Action::FillY,
        }];
        let outcome = SearchOutcome::solved(steps, SearchStats::default());

        assert!(outcome.is_solved());
        assert_eq!(outcome.best_len(), Some(1));
        assert_eq!(outcome.final_state(), Some(JugState::new(0, 5)));

        let projected = outcome.solution_steps().unwrap();
        assert_eq!(projected[0].title, "Fill bucket Y");

        let (best, stats) = outcome.into_parts();
        assert_eq!(best.map(|b| b.len()), Some(1));
        assert_eq!(stats, SearchStats::default());
    }
}
