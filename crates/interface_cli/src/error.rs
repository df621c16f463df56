//! CLI error handling

use std::path::PathBuf;

use thiserror::Error;

use core_kernel::CoreError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read FNOL document {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
