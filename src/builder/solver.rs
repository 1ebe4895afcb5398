//! Builder for constructing solvers.

use crate::builder::options::SearchOptions;
use crate::search::Solver;

/// Builder for constructing a [`Solver`] with a fluent API.
pub struct SolverBuilder {
    options: SearchOptions,
}

impl SolverBuilder {
    /// Create a new builder with exhaustive search options.
    pub fn new() -> Self {
        Self {
            options: SearchOptions::default(),
        }
    }

    /// Replace all options at once.
    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable dominance pruning.
    pub fn prune_dominated(mut self, enabled: bool) -> Self {
        self.options.prune_dominated = enabled;
        self
    }

    /// Enable or disable bound pruning against the best solution.
    pub fn prune_bound(mut self, enabled: bool) -> Self {
        self.options.prune_bound = enabled;
        self
    }

    /// Build the solver.
    pub fn build(self) -> Solver {
        Solver::new(self.options)
    }
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
