//! Smoothness penalty between neighboring chain points.
//!
//! P(p) = w/2 · (‖p - prev‖² + ‖p - next‖²)
//!
//! Minimizing P alone moves p to the midpoint of its neighbors.
//! A missing neighbor (chain boundary) contributes nothing.

use super::chain::{Neighbor, Point};
use serde::{Deserialize, Serialize};

pub const REG_WEIGHT: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Regularization {
    pub weight: f64,
}

impl Default for Regularization {
    fn default() -> Self {
        Self { weight: REG_WEIGHT }
    }
}

impl Regularization {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Regularization switched off (weight 0).
    pub fn disabled() -> Self {
        Self { weight: 0.0 }
    }

    /// w/2 · ‖a - b‖² for a single chain edge.
    pub fn edge_penalty(&self, a: &Point, b: &Point) -> f64 {
        0.5 * self.weight * (a - b).norm_squared()
    }

    /// Penalty seen by one point, treating its neighbors as fixed.
    pub fn penalty(&self, point: &Point, previous: &Neighbor, next: &Neighbor) -> f64 {
        let side = |n: &Neighbor| match n {
            Neighbor::Boundary => 0.0,
            Neighbor::Interior(q) => self.edge_penalty(point, q),
        };
        side(previous) + side(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_penalty_both_neighbors() {
        let reg = Regularization::default();
        let p = Point::new(1.0, 1.0);
        let prev = Neighbor::Interior(Point::new(0.0, 0.0));
        let next = Neighbor::Interior(Point::new(3.0, 1.0));
        // 1.5 * (2 + 4) = 9
        assert_relative_eq!(reg.penalty(&p, &prev, &next), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_penalty_at_boundary_is_zero() {
        let reg = Regularization::default();
        let p = Point::new(5.0, -2.0);
        assert_eq!(reg.penalty(&p, &Neighbor::Boundary, &Neighbor::Boundary), 0.0);
    }

    #[test]
    fn test_disabled_has_no_penalty() {
        let reg = Regularization::disabled();
        let p = Point::new(1.0, 2.0);
        let n = Neighbor::Interior(Point::new(-4.0, 9.0));
        assert_eq!(reg.penalty(&p, &n, &n), 0.0);
    }
}
