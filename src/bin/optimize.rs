//! chain-optimize: smooth a pinned-endpoint chain and print the result
//!
//! Usage:
//!   chain-optimize --preset demo
//!   chain-optimize --input chain.json --iters 500 --lr 0.005 --out smoothed.json
//!   chain-optimize --start -10,-10 --end 10,10 --points 20 --log-interval 100

use anyhow::{anyhow, bail, Context};
use chain_opt::io::{format_bounds, format_vertices, load_chain, load_config, save_chain};
use chain_opt::optim::{run, RunConfig};
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  chain-optimize [--preset {}] [--config FILE] [--input FILE] [--start X,Y] [--end X,Y] [--points N] [--lr F] [--iters N] [--log-interval N] [--out FILE]",
        RunConfig::PRESETS.join("|")
    );
    eprintln!("  Note: presets/configs apply immediately; later flags override their values.");
    eprintln!("  Note: set RUST_LOG=info (or debug) for progress logging.");
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    args.next().ok_or_else(|| anyhow!("Missing value for {flag}"))
}

fn parse_pair(s: &str, flag: &str) -> anyhow::Result<[f64; 2]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        bail!("{flag} must be two comma-separated numbers (e.g. '-10,-10'), got '{s}'");
    }
    let x = parts[0].trim().parse::<f64>().with_context(|| format!("Invalid {flag} x: '{}'", parts[0]))?;
    let y = parts[1].trim().parse::<f64>().with_context(|| format!("Invalid {flag} y: '{}'", parts[1]))?;
    Ok([x, y])
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    println!("chain-optimize v{}", chain_opt::VERSION);

    let mut args = std::env::args().skip(1);
    let mut cfg = RunConfig::default();
    let mut out_path: Option<PathBuf> = None;

    while let Some(a) = args.next() {
        match a.as_str() {
            "--preset" => {
                let name = next_value(&mut args, "--preset")?;
                cfg = RunConfig::preset(&name).ok_or_else(|| {
                    anyhow!("Unknown --preset {name} (expected: {})", RunConfig::PRESETS.join(" | "))
                })?;
            }
            "--config" => {
                let path = PathBuf::from(next_value(&mut args, "--config")?);
                cfg = load_config(&path)
                    .with_context(|| format!("Failed to load config `{}`", path.display()))?;
            }
            "--input" => {
                let path = PathBuf::from(next_value(&mut args, "--input")?);
                let chain = load_chain(&path)
                    .with_context(|| format!("Failed to load chain `{}`", path.display()))?;
                cfg.chain = Some(chain);
            }
            "--start" => {
                cfg.start = parse_pair(&next_value(&mut args, "--start")?, "--start")?;
                cfg.chain = None;
            }
            "--end" => {
                cfg.end = parse_pair(&next_value(&mut args, "--end")?, "--end")?;
                cfg.chain = None;
            }
            "--points" => {
                cfg.num_points = next_value(&mut args, "--points")?.parse().context("Invalid --points")?;
                cfg.chain = None;
            }
            "--lr" => cfg.learning_rate = next_value(&mut args, "--lr")?.parse().context("Invalid --lr")?,
            "--iters" => cfg.iterations = next_value(&mut args, "--iters")?.parse().context("Invalid --iters")?,
            "--log-interval" => {
                cfg.log_interval = next_value(&mut args, "--log-interval")?
                    .parse()
                    .context("Invalid --log-interval")?
            }
            "--out" => out_path = Some(PathBuf::from(next_value(&mut args, "--out")?)),
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                print_usage();
                bail!("Unknown arg: {other}");
            }
        }
    }

    let out = run(&cfg)?;

    println!();
    println!("Original chain ({}):", format_bounds(&out.initial));
    print!("{}", format_vertices(&out.initial));
    println!();
    println!(
        "Optimized chain ({}), lr={}, iterations={}:",
        format_bounds(&out.optimized),
        cfg.learning_rate,
        cfg.iterations
    );
    print!("{}", format_vertices(&out.optimized));
    println!();
    println!("Energy: {:.6} -> {:.6}", out.initial_energy, out.final_energy);

    if let Some(path) = out_path {
        save_chain(&out.optimized, &path)
            .with_context(|| format!("Failed to save chain `{}`", path.display()))?;
        eprintln!("Saved `{}`", path.display());
    }

    Ok(())
}
