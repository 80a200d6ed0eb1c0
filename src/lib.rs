//! # chain-opt: pinned-endpoint chain smoothing in Rust
//!
//! This crate moves the interior points of a 2D chain downhill on the
//! quadratic potential f(x, y) = a·x² + b·y², while a neighbor-distance
//! penalty keeps the chain smooth. The two endpoints never move.
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - `core`: Fundamental data structures (points, chains, potential, penalty)
//! - `diff`: Analytic gradients of the potential and the penalty
//! - `optim`: Gradient-descent update, iteration loop, run driver
//! - `io`: JSON chain/config files and vertex listings
//!
//! ## Example
//!
//! ```
//! use chain_opt::{optimize, Chain, Point};
//!
//! let chain = Chain::interpolate(Point::new(-10.0, -10.0), Point::new(10.0, 10.0), 20)?;
//! let smoothed = optimize(&chain, 0.01, 1000);
//! assert_eq!(smoothed.start(), chain.start());
//! assert_eq!(smoothed.end(), chain.end());
//! # Ok::<(), chain_opt::ChainError>(())
//! ```

// Core data structures
pub mod core;

// Gradients (backward passes)
pub mod diff;

// Optimization loop and run orchestration
pub mod optim;

// I/O operations (JSON, text listings)
pub mod io;

// Re-export commonly used types at crate root for convenience
pub use crate::core::{Chain, ChainError, Neighbor, Point};
pub use diff::{potential_gradient, regularization_gradient};
pub use io::LoadError;
pub use optim::{optimize, optimize_points, update_vertex, ChainOptimizer, RunConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
