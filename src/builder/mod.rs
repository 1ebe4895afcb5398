//! Builder API for configuring solvers.
//!
//! `SearchOptions` is plain serializable configuration; `SolverBuilder`
//! offers a fluent way to assemble it into a [`Solver`](crate::search::Solver).
//!
//! # Example
//!
//! ```rust
//! use twojug::builder::SolverBuilder;
//!
//! let solver = SolverBuilder::new().prune_dominated(true).build();
//! let steps = solver.solve(4, 3, 2).unwrap();
//! assert_eq!(steps.len(), 4);
//! ```

pub mod error;
pub mod options;
pub mod solver;

pub use error::ConfigError;
pub use options::SearchOptions;
pub use solver::SolverBuilder;
