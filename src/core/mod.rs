//! State-space model of the two bucket problem.
//!
//! This module contains the pure core of the solver:
//! - `JugState` and `Capacities`: water levels and their bounds
//! - `Action`: the six operations with their preconditions and effects
//! - `Step` and `Path`: records of applied actions along one search branch
//!
//! Everything here is a plain value with no side effects.

mod action;
mod path;
mod state;

pub use action::Action;
pub use path::{Path, Step};
pub use state::{Capacities, JugState, Volume};
