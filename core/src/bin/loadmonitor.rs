use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use loadmonitor_core::cli::{print_report, RenderOptions};
use loadmonitor_core::{analyze_ingested, load_config, read_csv_path, save_report, EngineConfig, Metrics};

/// Analyserer en eksportert treningslogg (CSV) og skriver status og anbefalinger.
#[derive(Debug, Parser)]
#[command(name = "loadmonitor", version)]
struct Args {
    /// CSV-fil med økter (Date, Distance, Aerobic Effect, Mean Heart Rate, Mean Pace)
    input: PathBuf,
    /// JSON-konfig (manglende felt får default)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Skriv full rapport som JSON hit
    #[arg(short, long)]
    json: Option<PathBuf>,
    /// Vis tabell med alle økter
    #[arg(short, long, default_value_t = false)]
    table: bool,
    /// Desimaler i tekstrapporten
    #[arg(long, default_value_t = 1)]
    decimals: usize,
    /// Debug-logging (overstyres av RUST_LOG)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // tracing-log-broen fanger opp `log`-kall fra biblioteket
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let cfg = match &args.config {
        Some(p) => load_config(p).with_context(|| format!("kunne ikke laste konfig {}", p.display()))?,
        None => EngineConfig::default(),
    };

    let metrics = Metrics::new().map_err(|e| anyhow::anyhow!("kunne ikke sette opp tellere: {e}"))?;
    let ingested = read_csv_path(&args.input)
        .with_context(|| format!("kunne ikke lese {}", args.input.display()))?;
    let report = analyze_ingested(&ingested, &cfg, Some(&metrics))
        .context("analysen feilet – sjekk at CSV-en har kolonnene Date, Distance, Aerobic Effect, Mean Heart Rate, Mean Pace")?;

    let opts = RenderOptions { decimals: args.decimals, show_table: args.table };
    print_report(&report, &opts);

    if let Some(out) = &args.json {
        save_report(&report, out).with_context(|| format!("kunne ikke skrive {}", out.display()))?;
    }

    log::debug!("tellere: {metrics:?}");
    Ok(())
}
