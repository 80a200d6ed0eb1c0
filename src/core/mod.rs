//! Core data structures and forward values.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Point` / `Chain`: the 2D chain being optimized
//! - `Neighbor`: explicit boundary/interior marker for a point's neighbors
//! - `QuadraticPotential`: the scalar field f(x, y) = a·x² + b·y²
//! - `Regularization`: the neighbor-distance penalty
//!
//! All types here are "pure data" - no I/O, no optimization logic.
//! Gradients live in `diff`.

mod chain;
mod potential;
mod regularization;

pub use chain::{Chain, ChainError, Neighbor, Point};
pub use potential::{QuadraticPotential, POTENTIAL_A, POTENTIAL_B};
pub use regularization::{Regularization, REG_WEIGHT};
