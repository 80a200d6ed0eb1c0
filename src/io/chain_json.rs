//! JSON chain and config files.
//!
//! A chain file is a bare array of coordinate pairs:
//!
//! ```json
//! [[-3.0, -2.0], [0.0, 0.0], [4.0, 5.0], [7.0, 8.0]]
//! ```
//!
//! Length is validated on load; a file with fewer than two points is
//! rejected.

use crate::core::Chain;
use crate::io::LoadError;
use crate::optim::RunConfig;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub fn load_chain(path: &Path) -> Result<Chain, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    // Parse coordinates first so a short chain surfaces as `LoadError::Chain`
    // instead of an opaque serde message.
    let coords: Vec<[f64; 2]> = serde_json::from_reader(reader)?;
    Ok(Chain::from_coords(&coords)?)
}

pub fn save_chain(chain: &Chain, path: &Path) -> Result<(), LoadError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, chain)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn load_config(path: &Path) -> Result<RunConfig, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
