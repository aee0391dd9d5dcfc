//! Handshake timing analysis CLI.
//!
//! Aggregates recorded trial batches into per-step latency statistics and
//! writes JSON and text reports per role.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{bail, Context, Result};

use handshake_bench::dataset::Dataset;
use handshake_bench::keys::Role;
use handshake_bench::loader::load_trials;
use handshake_bench::report::{build_report, generate_json_report, generate_text_report};

#[derive(Parser)]
#[command(name = "hs-analyzer")]
#[command(about = "Timing analysis for attestation-augmented TLS handshake benchmarks")]
#[command(version)]
struct Cli {
    /// Path to client-role trial records (JSON array)
    #[arg(short, long)]
    client: Option<PathBuf>,

    /// Path to server-role trial records (JSON array)
    #[arg(short, long)]
    server: Option<PathBuf>,

    /// Total percentage of samples to discard as outliers, split between
    /// both tails (0 disables truncation)
    #[arg(short, long, default_value = "0")]
    truncate: f64,

    /// Output directory for reports
    #[arg(short, long, default_value = "analysis_output")]
    output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if cli.client.is_none() && cli.server.is_none() {
        bail!("No trial files given; pass --client and/or --server");
    }

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("Failed to create output directory {}", cli.output.display()))?;

    if let Some(path) = cli.client.as_deref() {
        analyze_role(path, Role::Client, cli.truncate, &cli.output)?;
    }
    if let Some(path) = cli.server.as_deref() {
        analyze_role(path, Role::Server, cli.truncate, &cli.output)?;
    }

    log::info!("Analysis complete; reports in {}", cli.output.display());
    Ok(())
}

/// Load, aggregate, optionally truncate and report one role's trial batch.
fn analyze_role(path: &Path, role: Role, truncate: f64, output: &Path) -> Result<()> {
    log::info!("Loading {} trials from {}...", role, path.display());
    let trials = load_trials(path)?;

    let mut dataset = Dataset::new(&trials, role)
        .with_context(|| format!("Failed to aggregate {} trials", role))?;
    log::info!(
        "Aggregated {} trials across {} steps",
        dataset.trial_count(),
        dataset.data.len()
    );

    if truncate != 0.0 {
        dataset
            .truncate(truncate)
            .with_context(|| format!("Failed to truncate {} dataset at {}%", role, truncate))?;
        log::info!(
            "Truncated outliers: {}% total, {} trials remain per step",
            truncate,
            dataset.trial_count()
        );
    }

    let report = build_report(&dataset, &path.display().to_string(), truncate);
    generate_json_report(&report, &output.join(format!("{}_report.json", role)))?;
    generate_text_report(&report, &output.join(format!("{}_report.txt", role)))?;
    Ok(())
}
