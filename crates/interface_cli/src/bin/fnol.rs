//! FNOL Router - command-line entry point
//!
//! Reads one First Notice of Loss text document, extracts the claim fields,
//! routes the claim and prints the decision report on stdout.
//!
//! # Usage
//!
//! ```bash
//! fnol-router claims/fnol_0412.txt
//!
//! # Verbose diagnostics on stderr
//! FNOL_LOG_LEVEL=debug FNOL_LOG_FORMAT=json fnol-router claims/fnol_0412.txt
//! ```
//!
//! # Environment Variables
//!
//! * `FNOL_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)
//! * `FNOL_LOG_FORMAT` - Log line format: text, json (default: text)
//! * `RUST_LOG` - Overrides `FNOL_LOG_LEVEL`

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use interface_cli::{config::CliConfig, process_file, telemetry::init_tracing, usage};

/// Extracts and routes a First Notice of Loss document
#[derive(Debug, Parser)]
#[command(name = "fnol-router", version, about)]
struct Cli {
    /// Path to the FNOL text document
    #[arg(value_name = "PATH_TO_FNOL_TXT")]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let (config, config_error) = match CliConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (CliConfig::default(), Some(err)),
    };
    init_tracing(&config);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "invalid configuration, using defaults");
    }

    let cli = Cli::parse();
    let Some(input) = cli.input else {
        println!("{}", usage());
        return Ok(());
    };

    let report = process_file(&input)
        .with_context(|| format!("could not process {}", input.display()))?;
    println!("{}", report);

    Ok(())
}
