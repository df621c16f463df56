//! Command-line layer
//!
//! Reads an FNOL document from disk, runs the intake pipeline and renders
//! the routing decision as a report.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::process_file;
//!
//! let report = process_file(Path::new("claim.txt"))?;
//! println!("{}", report);
//! ```

pub mod config;
pub mod error;
pub mod telemetry;

use std::fs;
use std::path::Path;

use core_kernel::encoding::to_report_string;
use domain_claims::{process_document, RoutingDecision};

use crate::error::CliError;

/// Name of the installed binary
pub const BIN_NAME: &str = "fnol-router";

/// Returns the usage line printed when no input path is given
pub fn usage() -> String {
    format!("Usage: {} <path_to_fnol.txt>", BIN_NAME)
}

/// Reads a document as UTF-8 text
pub fn read_document(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders a routing decision as the report printed on stdout
pub fn render_decision(decision: &RoutingDecision) -> Result<String, CliError> {
    Ok(to_report_string(decision)?)
}

/// Reads, processes and renders one FNOL document
pub fn process_file(path: &Path) -> Result<String, CliError> {
    let text = read_document(path)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "processing FNOL document");

    let decision = process_document(&text);
    render_decision(&decision)
}
