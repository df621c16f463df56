//! CLI configuration
//!
//! Settings only shape diagnostics on stderr; the report printed on stdout
//! never depends on them.

use serde::Deserialize;

use crate::error::CliError;

/// Format of log lines written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level filter: trace, debug, info, warn, error
    pub log_level: String,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `FNOL_`-prefixed environment variables
    pub fn from_env() -> Result<Self, CliError> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("FNOL"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}
