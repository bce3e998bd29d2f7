//! Checker configuration

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file looked up in the working directory (any supported extension)
pub const DEFAULT_CONFIG_FILE: &str = "site-checker";

/// Prefix for environment overrides, e.g. `SITE_CHECKER_OUTPUT=json`
pub const ENV_PREFIX: &str = "SITE_CHECKER";

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One plain line per rule
    #[default]
    Text,
    /// One paragraph per rule with a bold heading
    Markdown,
    /// Pretty-printed JSON object keyed by rule name
    Json,
}

/// Checker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Report output format
    pub output: OutputFormat,
    /// Maximum log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl CheckerConfig {
    /// Layer defaults, a config file, and `SITE_CHECKER_*` environment variables.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
