//! Depth-first search over the bucket state space.
//!
//! The engine walks every simple path from the origin using an explicit
//! stack instead of recursion. At each active state it tries actions in
//! their fixed order starting from a cursor; a candidate state already on the
//! path (the origin included) is rejected. When no action from the cursor
//! is accepted it pops the last step, restores the previous state and
//! resumes right after the action that led to the discarded state. The
//! search ends once the origin has no actions left.
//!
//! No visited set is kept across branches, so the same state can be
//! explored again through a different path. That is what makes the search
//! exhaustive, and also what makes its cost grow combinatorially.
//! [`SearchOptions`] can enable prunings that keep the solution length.

use crate::builder::SearchOptions;
use crate::core::{Action, Capacities, JugState, Path, Step};
use crate::problem::Problem;
use crate::search::incumbent::BestSolution;
use crate::search::outcome::SearchOutcome;
use crate::search::stats::SearchStats;
use crate::solution::SolutionStep;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Shortest-solution finder for the two bucket problem.
///
/// A solver only holds configuration. Each call owns its own path stack and
/// best-solution slot, so one solver can serve many callers at once.
///
/// # Example
///
/// ```rust
/// use twojug::search::Solver;
///
/// let solver = Solver::default();
///
/// let steps = solver.solve(0, 5, 5).unwrap();
/// assert_eq!(steps.len(), 1);
/// assert_eq!(steps[0].title, "Fill bucket Y");
///
/// assert!(solver.solve(2, 2, 1).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    options: SearchOptions,
}

impl Solver {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search a validated problem.
    pub fn search(&self, problem: &Problem) -> SearchOutcome {
        let capacities = problem.capacities();
        debug!(
            x_capacity = capacities.x,
            y_capacity = capacities.y,
            target = problem.target(),
            prune_dominated = self.options.prune_dominated,
            prune_bound = self.options.prune_bound,
            "search started"
        );

        let outcome = SearchSession::new(problem, &self.options).run();

        debug!(
            best_len = ?outcome.best_len(),
            nodes = outcome.stats().nodes_explored,
            backtracks = outcome.stats().backtracks,
            max_depth = outcome.stats().max_depth,
            "search finished"
        );
        outcome
    }

    /// Validate raw inputs and search. `None` means the input was rejected.
    pub fn solve_with_stats(
        &self,
        x_capacity: i64,
        y_capacity: i64,
        target: i64,
    ) -> Option<SearchOutcome> {
        match Problem::new(x_capacity, y_capacity, target) {
            Ok(problem) => Some(self.search(&problem)),
            Err(errors) => {
                let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
                debug!(x_capacity, y_capacity, target, ?reasons, "input rejected");
                None
            }
        }
    }

    /// Find the shortest sequence of steps, or `None` if there is none.
    pub fn solve(
        &self,
        x_capacity: i64,
        y_capacity: i64,
        target: i64,
    ) -> Option<Vec<SolutionStep>> {
        self.solve_with_stats(x_capacity, y_capacity, target)?
            .solution_steps()
    }
}

/// Per-run search state.
struct SearchSession<'a> {
    problem: &'a Problem,
    options: &'a SearchOptions,
    capacities: Capacities,
    path: Path,
    incumbent: BestSolution,
    stats: SearchStats,
    // Fewest steps any push has needed to reach a state.
    best_depth: HashMap<JugState, usize>,
}

impl<'a> SearchSession<'a> {
    fn new(problem: &'a Problem, options: &'a SearchOptions) -> Self {
        let capacities = problem.capacities();
        let depth_hint = usize::try_from(capacities.state_space_size()).unwrap_or(usize::MAX);

        Self {
            problem,
            options,
            capacities,
            path: Path::with_capacity(depth_hint.min(1024)),
            incumbent: BestSolution::new(),
            stats: SearchStats::default(),
            best_depth: HashMap::new(),
        }
    }

    fn run(mut self) -> SearchOutcome {
        let mut cursor = 0;

        loop {
            if let Some(step) = self.next_step(cursor) {
                self.descend(step);
                cursor = 0;
                continue;
            }

            // Every action from the cursor is exhausted for this state.
            match self.path.pop() {
                Some(step) => {
                    self.stats.on_backtrack();
                    cursor = step.action.index() + 1;
                }
                None => break,
            }
        }

        match self.incumbent.into_steps() {
            Some(steps) => SearchOutcome::solved(steps, self.stats),
            None => SearchOutcome::unsolvable(self.stats),
        }
    }

    /// First accepted step from the active state, trying actions from `cursor`.
    fn next_step(&mut self, cursor: usize) -> Option<Step> {
        let from = self.path.current();
        Action::ALL.iter().skip(cursor).find_map(|&action| {
            let to = self.accept(action, &from)?;
            Some(Step { from, to, action })
        })
    }

    /// Apply `action` and run the prunings on the resulting state.
    fn accept(&mut self, action: Action, from: &JugState) -> Option<JugState> {
        let next = action.try_apply(from, &self.capacities)?;
        let depth = self.path.len() + 1;

        if self.options.prune_bound && !self.incumbent.would_improve(depth) {
            self.stats.on_pruning_bound();
            return None;
        }

        if self.path.visits(&next) {
            self.stats.on_pruning_cycle();
            return None;
        }

        if self.options.prune_dominated {
            if self
                .best_depth
                .get(&next)
                .is_some_and(|&reached| reached <= depth)
            {
                self.stats.on_pruning_dominated();
                return None;
            }
            self.best_depth.insert(next, depth);
        }

        Some(next)
    }

    fn descend(&mut self, step: Step) {
        self.path.push(step);
        self.stats.on_node_explored();
        self.stats.on_depth_update(self.path.len());

        if !self.problem.is_solution(&step.to) {
            return;
        }

        self.stats.on_solution_found();
        if self.incumbent.offer(&self.path) {
            self.stats.on_improvement();
            trace!(len = self.path.len(), state = %step.to, "improved solution");
        }
    }
}
