//! Fixed-step gradient descent over a chain.
//!
//! Each iteration is a Jacobi sweep: every free point is updated from the
//! previous iteration's snapshot, and the results are collected into a new
//! chain. Anchors are copied through untouched.

use crate::core::{Chain, ChainError, Neighbor, Point, QuadraticPotential, Regularization};

/// Potential + regularization coefficients for one optimization run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChainOptimizer {
    pub potential: QuadraticPotential,
    pub regularization: Regularization,
}

impl ChainOptimizer {
    pub fn new(potential: QuadraticPotential, regularization: Regularization) -> Self {
        Self {
            potential,
            regularization,
        }
    }

    /// ∇f(p) + ∇P(p) for a single point.
    pub fn total_gradient(&self, point: &Point, previous: &Neighbor, next: &Neighbor) -> Point {
        self.potential.gradient(point) + self.regularization.gradient(point, previous, next)
    }

    /// One gradient-descent step for a single point: p - lr · ∇.
    pub fn update_vertex(
        &self,
        point: &Point,
        previous: &Neighbor,
        next: &Neighbor,
        learning_rate: f64,
    ) -> Point {
        point - self.total_gradient(point, previous, next) * learning_rate
    }

    /// One synchronous iteration over all free points.
    pub fn step(&self, chain: &Chain, learning_rate: f64) -> Chain {
        let points = chain
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if chain.is_anchor(i) {
                    *p
                } else {
                    let (previous, next) = chain.neighbors(i);
                    self.update_vertex(p, &previous, &next, learning_rate)
                }
            })
            .collect();
        Chain::from_points_unchecked(points)
    }

    /// Run `iterations` steps and return the final chain.
    ///
    /// The input is never modified. Zero iterations (or a chain with no
    /// free points) yields a chain equal to the input.
    pub fn optimize(&self, chain: &Chain, learning_rate: f64, iterations: usize) -> Chain {
        log::debug!(
            "optimize: {} points, lr={}, iterations={}",
            chain.num_points(),
            learning_rate,
            iterations
        );
        let mut current = chain.clone();
        for _ in 0..iterations {
            current = self.step(&current, learning_rate);
        }
        log::debug!("optimize: done, energy={:.6}", self.energy(&current));
        current
    }

    /// Objective whose per-point gradient drives `update_vertex`:
    /// Σ_free f(p_i) + Σ_edges w/2 · ‖p_{i+1} - p_i‖².
    ///
    /// Reported for monitoring only; the loop never looks at it.
    pub fn energy(&self, chain: &Chain) -> f64 {
        let points = chain.points();
        let potential: f64 = chain
            .free_indices()
            .map(|i| self.potential.value(&points[i]))
            .sum();
        let smoothness: f64 = points
            .windows(2)
            .map(|w| self.regularization.edge_penalty(&w[0], &w[1]))
            .sum();
        potential + smoothness
    }
}

/// Gradient-descent step for one point with the default coefficients.
pub fn update_vertex(point: &Point, previous: &Neighbor, next: &Neighbor, learning_rate: f64) -> Point {
    ChainOptimizer::default().update_vertex(point, previous, next, learning_rate)
}

/// Optimize a chain with the default coefficients.
pub fn optimize(chain: &Chain, learning_rate: f64, iterations: usize) -> Chain {
    ChainOptimizer::default().optimize(chain, learning_rate, iterations)
}

/// Optimize a plain sequence of `[x, y]` pairs.
///
/// Fails when fewer than two points are given, since there are no anchors.
pub fn optimize_points(
    coords: &[[f64; 2]],
    learning_rate: f64,
    iterations: usize,
) -> Result<Vec<[f64; 2]>, ChainError> {
    let chain = Chain::from_coords(coords)?;
    Ok(optimize(&chain, learning_rate, iterations).to_coords())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn four_point_chain() -> Chain {
        Chain::from_coords(&[[-3.0, -2.0], [0.0, 0.0], [4.0, 5.0], [7.0, 8.0]]).unwrap()
    }

    #[test]
    fn test_update_vertex_moves_against_gradient() {
        // ∇f(1, 0) = (0.4, 0); no neighbors.
        let p = update_vertex(&Point::new(1.0, 0.0), &Neighbor::Boundary, &Neighbor::Boundary, 0.5);
        assert_relative_eq!(p.x, 0.8, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_step_uses_previous_snapshot() {
        // With a Gauss-Seidel sweep, point 2 would see the already-moved point 1.
        let chain = four_point_chain();
        let lr = 0.01;
        let stepped = ChainOptimizer::default().step(&chain, lr);

        let expected_2 = update_vertex(
            &chain[2],
            &Neighbor::Interior(chain[1]),
            &Neighbor::Interior(chain[3]),
            lr,
        );
        assert_eq!(stepped[2], expected_2);
    }

    #[test]
    fn test_two_point_chain_is_unchanged() {
        let chain = Chain::from_coords(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(optimize(&chain, 0.1, 50), chain);
    }

    #[test]
    fn test_input_not_mutated() {
        let chain = four_point_chain();
        let copy = chain.clone();
        let _ = optimize(&chain, 0.01, 10);
        assert_eq!(chain, copy);
    }

    #[test]
    fn test_optimize_points_rejects_single_point() {
        assert_eq!(
            optimize_points(&[[0.0, 0.0]], 0.01, 10),
            Err(ChainError::TooShort { len: 1 })
        );
    }

    #[test]
    fn test_energy_decreases_on_smoothing_run() {
        let start = Point::new(-10.0, -10.0);
        let end = Point::new(10.0, 10.0);
        let mut chain = Chain::interpolate(start, end, 20).unwrap();
        // Kink the chain so the penalty dominates.
        chain = Chain::new(
            chain
                .points()
                .iter()
                .enumerate()
                .map(|(i, p)| if i == 10 { p + Point::new(4.0, -4.0) } else { *p })
                .collect(),
        )
        .unwrap();

        let opt = ChainOptimizer::default();
        let before = opt.energy(&chain);
        let after = opt.energy(&opt.optimize(&chain, 0.01, 20));
        assert!(after < before, "energy should drop ({before} -> {after})");
    }
}
