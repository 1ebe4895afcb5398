//! Search engine over the bucket state space.
//!
//! # Key Concepts
//!
//! - **Solver**: configuration plus the entry points `search` and `solve`
//! - **Session**: per-run path stack, best-solution slot and statistics
//! - **Outcome**: the best path found together with the run's statistics
//!
//! Searches are synchronous and deterministic. Nothing is shared between
//! runs, so repeated calls with the same input return the same outcome.

mod engine;
mod incumbent;
mod outcome;
mod stats;

pub use engine::Solver;
pub use incumbent::BestSolution;
pub use outcome::SearchOutcome;
pub use stats::SearchStats;
