//! Gradient of the quadratic potential.

use crate::core::{Point, QuadraticPotential};

impl QuadraticPotential {
    /// ∇f(x, y) = (2·a·x, 2·b·y)
    pub fn gradient(&self, point: &Point) -> Point {
        Point::new(2.0 * self.a * point.x, 2.0 * self.b * point.y)
    }
}

/// Gradient of f(x, y) = 0.2·x² - 0.2·y².
pub fn potential_gradient(point: &Point) -> Point {
    QuadraticPotential::default().gradient(point)
}
