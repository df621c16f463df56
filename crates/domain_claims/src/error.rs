//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
///
/// Extraction and routing never fail; these cover parsing the rendered
/// names of domain enums back into values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Unknown claim type: {0}")]
    UnknownClaimType(String),

    #[error("Unknown asset type: {0}")]
    UnknownAssetType(String),

    #[error("Unknown mandatory field: {0}")]
    UnknownMandatoryField(String),
}
