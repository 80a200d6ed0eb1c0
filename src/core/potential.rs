//! Quadratic potential f(x, y) = a·x² + b·y².
//!
//! With the default coefficients (a > 0, b < 0) the origin is a saddle:
//! points are pulled toward x = 0 and pushed away from y = 0.

use super::chain::Point;
use serde::{Deserialize, Serialize};

pub const POTENTIAL_A: f64 = 0.2;
pub const POTENTIAL_B: f64 = -0.2;

/// Coefficients of the fixed quadratic form a·x² + b·y².
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadraticPotential {
    pub a: f64,
    pub b: f64,
}

impl Default for QuadraticPotential {
    fn default() -> Self {
        Self {
            a: POTENTIAL_A,
            b: POTENTIAL_B,
        }
    }
}

impl QuadraticPotential {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Evaluate f at `point`.
    pub fn value(&self, point: &Point) -> f64 {
        self.a * point.x * point.x + self.b * point.y * point.y
    }
}
