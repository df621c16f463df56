//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the FNOL intake test suites.
//!
//! # Modules
//!
//! - `fixtures`: Label constants and canned FNOL documents
//! - `builders`: Builder for FNOL document text
//! - `assertions`: Assertion helpers for routing decisions
//! - `generators`: Property-based document generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
