//! Chain of 2D points with pinned endpoints.
//!
//! A chain is an ordered sequence of at least two points:
//! - Index 0 and index `len - 1` are anchors and never move
//! - Everything in between is a free point, updated by the optimizer
//!
//! Chains are values. The optimizer reads one chain and builds a new one,
//! so a snapshot is never observed half-updated.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::ops::{Index, Range};
use thiserror::Error;

/// A 2D point (x, y).
pub type Point = Vector2<f64>;

/// Errors raised when a chain cannot be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChainError {
    #[error("chain needs at least 2 points, got {len}")]
    TooShort { len: usize },
}

/// The point on one side of a chain vertex.
///
/// Anchors have a `Boundary` on their outer side. Free points always
/// have two `Interior` neighbors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Neighbor {
    Boundary,
    Interior(Point),
}

impl Neighbor {
    pub fn from_option(point: Option<Point>) -> Self {
        match point {
            Some(p) => Neighbor::Interior(p),
            None => Neighbor::Boundary,
        }
    }
}

/// An ordered sequence of points, length ≥ 2.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Chain {
    points: Vec<Point>,
}

impl Chain {
    /// Minimum number of points (the two anchors).
    pub const MIN_POINTS: usize = 2;

    pub fn new(points: Vec<Point>) -> Result<Self, ChainError> {
        if points.len() < Self::MIN_POINTS {
            return Err(ChainError::TooShort { len: points.len() });
        }
        Ok(Self { points })
    }

    /// Build a chain from raw `[x, y]` pairs.
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self, ChainError> {
        Self::new(coords.iter().map(|c| Point::new(c[0], c[1])).collect())
    }

    /// Sample `num_points` points evenly on the segment `start → end`.
    ///
    /// p_i = start + (end - start) * i / (num_points - 1)
    pub fn interpolate(start: Point, end: Point, num_points: usize) -> Result<Self, ChainError> {
        if num_points < Self::MIN_POINTS {
            return Err(ChainError::TooShort { len: num_points });
        }
        let span = end - start;
        let denom = (num_points - 1) as f64;
        let points = (0..num_points)
            .map(|i| {
                // Pin the last sample exactly; start + span * 1.0 can be off by an ulp.
                if i == num_points - 1 {
                    end
                } else {
                    start + span * (i as f64 / denom)
                }
            })
            .collect();
        Ok(Self { points })
    }

    /// Construct without the length check. Callers must preserve an
    /// already-validated length.
    pub(crate) fn from_points_unchecked(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= Self::MIN_POINTS);
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// First anchor.
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last anchor.
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Index range of the free points (empty for a 2-point chain).
    pub fn free_indices(&self) -> Range<usize> {
        1..self.points.len() - 1
    }

    pub fn is_anchor(&self, index: usize) -> bool {
        index == 0 || index == self.points.len() - 1
    }

    /// Previous and next neighbor of the point at `index`.
    pub fn neighbors(&self, index: usize) -> (Neighbor, Neighbor) {
        let previous = index
            .checked_sub(1)
            .and_then(|i| self.points.get(i))
            .copied();
        let next = self.points.get(index + 1).copied();
        (Neighbor::from_option(previous), Neighbor::from_option(next))
    }

    /// Axis-aligned bounds as (min corner, max corner).
    pub fn bounds(&self) -> (Point, Point) {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min = min.inf(p);
            max = max.sup(p);
        }
        (min, max)
    }

    pub fn to_coords(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }
}

impl Index<usize> for Chain {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl TryFrom<Vec<[f64; 2]>> for Chain {
    type Error = ChainError;

    fn try_from(coords: Vec<[f64; 2]>) -> Result<Self, ChainError> {
        Self::from_coords(&coords)
    }
}

impl From<Chain> for Vec<[f64; 2]> {
    fn from(chain: Chain) -> Self {
        chain.to_coords()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_short_chains() {
        assert_eq!(Chain::new(vec![]), Err(ChainError::TooShort { len: 0 }));
        assert_eq!(
            Chain::new(vec![Point::new(1.0, 2.0)]),
            Err(ChainError::TooShort { len: 1 })
        );
        assert!(Chain::new(vec![Point::zeros(), Point::zeros()]).is_ok());
    }

    #[test]
    fn test_interpolate_endpoints_and_spacing() {
        let start = Point::new(-10.0, -10.0);
        let end = Point::new(10.0, 10.0);
        let chain = Chain::interpolate(start, end, 20).unwrap();

        assert_eq!(chain.num_points(), 20);
        assert_eq!(chain.start(), start);
        assert_eq!(chain.end(), end);

        // Step is 20 / 19 on both axes.
        let step = 20.0 / 19.0;
        for i in 0..20 {
            assert_relative_eq!(chain[i].x, -10.0 + step * i as f64, epsilon = 1e-12);
            assert_relative_eq!(chain[i].y, -10.0 + step * i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_interpolate_needs_two_samples() {
        let r = Chain::interpolate(Point::zeros(), Point::new(1.0, 1.0), 1);
        assert_eq!(r, Err(ChainError::TooShort { len: 1 }));
    }

    #[test]
    fn test_neighbors_at_boundaries() {
        let chain = Chain::from_coords(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]).unwrap();

        let (prev, next) = chain.neighbors(0);
        assert_eq!(prev, Neighbor::Boundary);
        assert_eq!(next, Neighbor::Interior(Point::new(1.0, 1.0)));

        let (prev, next) = chain.neighbors(1);
        assert_eq!(prev, Neighbor::Interior(Point::new(0.0, 0.0)));
        assert_eq!(next, Neighbor::Interior(Point::new(2.0, 0.0)));

        let (prev, next) = chain.neighbors(2);
        assert_eq!(prev, Neighbor::Interior(Point::new(1.0, 1.0)));
        assert_eq!(next, Neighbor::Boundary);
    }

    #[test]
    fn test_free_indices() {
        let two = Chain::from_coords(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
        assert!(two.free_indices().is_empty());

        let four = Chain::from_coords(&[[-3.0, -2.0], [0.0, 0.0], [4.0, 5.0], [7.0, 8.0]]).unwrap();
        assert_eq!(four.free_indices(), 1..3);
        assert!(four.is_anchor(0));
        assert!(four.is_anchor(3));
        assert!(!four.is_anchor(1));
    }

    #[test]
    fn test_bounds() {
        let chain = Chain::from_coords(&[[-3.0, 2.0], [0.0, -4.0], [7.0, 8.0]]).unwrap();
        let (min, max) = chain.bounds();
        assert_eq!(min, Point::new(-3.0, -4.0));
        assert_eq!(max, Point::new(7.0, 8.0));
    }
}
