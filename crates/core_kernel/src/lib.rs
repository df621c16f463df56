//! Core Kernel - Foundational utilities for the FNOL intake system
//!
//! This crate provides the building blocks shared by the domain and
//! interface crates:
//! - Label-oriented pattern matching over free text
//! - The order-preserving report encoder
//! - The common error type

pub mod text;
pub mod encoding;
pub mod error;

pub use text::{LabelPattern, collapse_whitespace};
pub use encoding::{to_report_string, write_report, ReportFormatter};
pub use error::CoreError;
