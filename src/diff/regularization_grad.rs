//! Gradient of the neighbor-distance penalty.
//!
//! ∂P/∂p = w · ((p - prev) + (p - next))
//!
//! A `Boundary` neighbor contributes the zero vector.

use crate::core::{Neighbor, Point, Regularization};

fn neighbor_delta(point: &Point, neighbor: &Neighbor) -> Point {
    match neighbor {
        Neighbor::Boundary => Point::zeros(),
        Neighbor::Interior(q) => point - q,
    }
}

impl Regularization {
    pub fn gradient(&self, point: &Point, previous: &Neighbor, next: &Neighbor) -> Point {
        let delta_prev = neighbor_delta(point, previous);
        let delta_next = neighbor_delta(point, next);
        (delta_prev + delta_next) * self.weight
    }
}

/// Regularization gradient with the default weight (3).
pub fn regularization_gradient(point: &Point, previous: &Neighbor, next: &Neighbor) -> Point {
    Regularization::default().gradient(point, previous, next)
}
