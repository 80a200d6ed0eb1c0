//! Optimization: the per-point update, the iteration loop, and the run driver.

pub mod descent;
pub mod runner;

pub use descent::{optimize, optimize_points, update_vertex, ChainOptimizer};
pub use runner::{run, RunConfig, RunOutputs};
