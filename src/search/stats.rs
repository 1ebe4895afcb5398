//! Counters collected during one search run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistics collected while traversing the state space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Steps pushed onto the path.
    pub nodes_explored: u64,
    /// Steps popped off the path.
    pub backtracks: u64,
    /// The longest path held at any point.
    pub max_depth: u64,
    /// Candidates rejected because their state was already on the path.
    pub prunings_cycle: u64,
    /// Candidates rejected because an earlier push reached the same state in
    /// no more steps.
    pub prunings_dominated: u64,
    /// Candidates rejected because they could not beat the best solution.
    pub prunings_bound: u64,
    /// Pushes that landed on a target state.
    pub solutions_found: u64,
    /// Solutions strictly shorter than every earlier one.
    pub improvements: u64,
}

impl SearchStats {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth as u64);
    }

    #[inline]
    pub fn on_pruning_cycle(&mut self) {
        self.prunings_cycle = self.prunings_cycle.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_dominated(&mut self) {
        self.prunings_dominated = self.prunings_dominated.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add(1);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes explored:        {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:            {}", self.backtracks)?;
        writeln!(f, "  Max depth reached:     {}", self.max_depth)?;
        writeln!(f, "  Prunings (cycle):      {}", self.prunings_cycle)?;
        writeln!(f, "  Prunings (dominated):  {}", self.prunings_dominated)?;
        writeln!(f, "  Prunings (bound):      {}", self.prunings_bound)?;
        writeln!(f, "  Solutions found:       {}", self.solutions_found)?;
        writeln!(f, "  Improvements:          {}", self.improvements)?;
        Ok(())
    }
}
