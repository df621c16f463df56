//! Claims Intake Domain
//!
//! This crate turns a free-text First Notice of Loss (FNOL) document into a
//! routing decision.
//!
//! # Pipeline
//!
//! ```text
//! raw text -> extraction -> ExtractedRecord -> routing -> RoutingDecision
//! ```
//!
//! Neither stage fails: fields the document does not provide become `None`
//! (or an `Unknown` sentinel) and surface as missing mandatory fields in the
//! decision.

pub mod record;
pub mod extraction;
pub mod routing;
pub mod pipeline;
pub mod error;

pub use record::{
    AssetDetails, AssetType, ClaimType, ExtractedRecord, IncidentInfo, InvolvedParties,
    MandatoryOthers, PolicyInfo,
};
pub use extraction::{extract_fields, classify_claim, FieldPatterns};
pub use routing::{route_claim, missing_fields, MandatoryField, Route, RoutingDecision};
pub use pipeline::process_document;
pub use error::ClaimError;
