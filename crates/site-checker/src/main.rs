//! Site Tracking Checker - Main Entry Point

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use site_checker::{check_file, init_logging, render, CheckerConfig, OutputFormat};
use std::path::PathBuf;
use tracing::info;

/// Flag clinical-trial sites whose tracking dates or statuses break the rules
#[derive(Debug, Parser)]
#[command(name = "site-checker", version)]
struct Cli {
    /// Site tracking export (.csv or .xlsx)
    file: PathBuf,

    /// Evaluate as of this date (YYYY-MM-DD) instead of now
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Output format, overriding the configuration
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Configuration file (defaults to ./site-checker.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CheckerConfig::load(cli.config.as_deref())?;
    init_logging(&config)?;

    info!("=== Site Checker v{} ===", env!("CARGO_PKG_VERSION"));

    let reference = cli
        .reference_date
        .and_then(|date| date.and_hms_opt(0, 0, 0));
    let report = check_file(&cli.file, reference)?;

    let format = cli.format.unwrap_or(config.output);
    println!("{}", render(&report, format)?);

    Ok(())
}
