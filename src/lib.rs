//! Twojug: shortest solutions to the two bucket water jug problem
//!
//! Given two bucket capacities and a target amount, twojug finds the
//! shortest sequence of fill, empty and transfer operations that leaves the
//! target amount in either bucket. The search is a pure computation: no I/O,
//! no shared state, the same input always produces the same answer.
//!
//! # Core Concepts
//!
//! - **State**: water levels of both buckets (`core::JugState`)
//! - **Action**: six operations with pure preconditions and effects (`core::Action`)
//! - **Path**: the stack of steps from the empty buckets to the active state
//! - **Solver**: depth-first search over simple paths that keeps the shortest solution
//!
//! # Example
//!
//! ```rust
//! use twojug::solve;
//!
//! let steps = solve(4, 3, 2).unwrap();
//! let titles: Vec<_> = steps.iter().map(|s| s.title.as_str()).collect();
//!
//! assert_eq!(
//!     titles,
//!     vec![
//!         "Fill bucket Y",
//!         "Transfer bucket Y to bucket X",
//!         "Fill bucket Y",
//!         "Transfer bucket Y to bucket X",
//!     ]
//! );
//!
//! // 1 unit can never be measured with two 2-unit buckets
//! assert!(solve(2, 2, 1).is_none());
//! ```

pub mod builder;
pub mod core;
pub mod problem;
pub mod response;
pub mod search;
pub mod solution;

// Re-export commonly used types
pub use builder::{SearchOptions, SolverBuilder};
pub use crate::core::{Action, Capacities, JugState};
pub use problem::{Problem, ProblemError};
pub use search::{SearchOutcome, Solver};
pub use solution::{solve, SolutionStep};
