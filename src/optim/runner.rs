//! Run orchestration: build a chain, optimize it, report energies.
//!
//! This is the library side of the `chain-optimize` binary. The loop is
//! split into `log_interval` chunks so progress can be logged; chunking
//! does not change the result because every iteration only reads the
//! previous snapshot.

use crate::core::{Chain, ChainError, Point};
use crate::optim::descent::ChainOptimizer;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// First anchor of a generated chain.
    pub start: [f64; 2],
    /// Last anchor of a generated chain.
    pub end: [f64; 2],
    /// Number of interpolated samples (anchors included).
    pub num_points: usize,
    pub learning_rate: f64,
    pub iterations: usize,
    /// Log energy every N iterations. 0 = only at start and end.
    pub log_interval: usize,
    /// Explicit initial chain. When set, `start`/`end`/`num_points` are ignored.
    pub chain: Option<Chain>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: [-10.0, -10.0],
            end: [10.0, 10.0],
            num_points: 20,
            learning_rate: 0.01,
            iterations: 1000,
            log_interval: 0,
            chain: None,
        }
    }
}

impl RunConfig {
    pub const PRESETS: &'static [&'static str] = &["demo", "small"];

    /// Named parameter sets.
    ///
    /// - `demo`: 20 points interpolated from (-10, -10) to (10, 10)
    /// - `small`: the 4-point chain (-3, -2), (0, 0), (4, 5), (7, 8)
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "demo" => Some(Self::default()),
            "small" => {
                let chain = Chain::from_coords(&[[-3.0, -2.0], [0.0, 0.0], [4.0, 5.0], [7.0, 8.0]])
                    .ok()?;
                Some(Self {
                    chain: Some(chain),
                    ..Self::default()
                })
            }
            _ => None,
        }
    }

    /// The chain this config starts from.
    pub fn initial_chain(&self) -> Result<Chain, ChainError> {
        match &self.chain {
            Some(chain) => Ok(chain.clone()),
            None => Chain::interpolate(
                Point::new(self.start[0], self.start[1]),
                Point::new(self.end[0], self.end[1]),
                self.num_points,
            ),
        }
    }
}

pub struct RunOutputs {
    pub initial: Chain,
    pub optimized: Chain,
    pub initial_energy: f64,
    pub final_energy: f64,
}

pub fn run(cfg: &RunConfig) -> Result<RunOutputs, ChainError> {
    let initial = cfg.initial_chain()?;
    let optimizer = ChainOptimizer::default();
    let initial_energy = optimizer.energy(&initial);

    log::info!(
        "run: {} points, lr={}, iterations={}, energy={:.6}",
        initial.num_points(),
        cfg.learning_rate,
        cfg.iterations,
        initial_energy
    );

    let chunk = if cfg.log_interval == 0 {
        cfg.iterations
    } else {
        cfg.log_interval
    };

    let mut chain = initial.clone();
    let mut done = 0usize;
    while done < cfg.iterations {
        let n = chunk.min(cfg.iterations - done);
        chain = optimizer.optimize(&chain, cfg.learning_rate, n);
        done += n;
        if cfg.log_interval > 0 {
            log::info!(
                "iter {}/{}: energy={:.6}",
                done,
                cfg.iterations,
                optimizer.energy(&chain)
            );
        }
    }

    let final_energy = optimizer.energy(&chain);
    log::info!("run: final energy={:.6}", final_energy);

    Ok(RunOutputs {
        initial,
        optimized: chain,
        initial_energy,
        final_energy,
    })
}
