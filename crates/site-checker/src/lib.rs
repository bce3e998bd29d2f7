//! Site Tracking Checker
//!
//! Loads a site tracking export, runs the rule engine, and renders the
//! violation report.

mod render;
mod settings;

pub use render::{render, MISSING_SITE};
pub use settings::{CheckerConfig, OutputFormat, DEFAULT_CONFIG_FILE, ENV_PREFIX};

use anyhow::Context;
use chrono::NaiveDateTime;
use rule_engine::{evaluate, evaluate_now, ViolationReport};
use std::path::Path;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging to stderr at the configured level
pub fn init_logging(config: &CheckerConfig) -> anyhow::Result<()> {
    let level: Level = config
        .log_level
        .parse()
        .with_context(|| format!("invalid log level {:?}", config.log_level))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

/// Load a site tracking export and evaluate every rule against it.
///
/// Without a reference date the current local time is used.
pub fn check_file(
    path: impl AsRef<Path>,
    reference: Option<NaiveDateTime>,
) -> anyhow::Result<ViolationReport> {
    let path = path.as_ref();
    let table = site_table::load_path(path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let report = match reference {
        Some(reference) => evaluate(&table, reference),
        None => evaluate_now(&table),
    }
    .with_context(|| format!("{} is not a usable site tracking export", path.display()))?;

    info!("Checked {}: {} flagged entries", path.display(), report.total());
    Ok(report)
}
