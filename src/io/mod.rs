//! I/O for chains and run configs.
//!
//! - JSON chain files (`[[x, y], ...]`)
//! - JSON run configs (`RunConfig`, missing fields default)
//! - Plain-text vertex listings for terminal output

mod chain_json;
mod report;

use crate::core::ChainError;
use thiserror::Error;

pub use chain_json::{load_chain, load_config, save_chain};
pub use report::{format_bounds, format_vertices};

/// Errors that can occur when reading or writing chain files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid chain: {0}")]
    Chain(#[from] ChainError),
}
