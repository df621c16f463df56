//! Extracted FNOL record
//!
//! The structured form of a First Notice of Loss document. Sections and
//! their fields serialize in declaration order, and every field is always
//! present: a value the document does not provide is `None` and renders
//! as `null`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// Kind of insured asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Vehicle,
    Unknown,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Vehicle => "Vehicle",
            AssetType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Vehicle" => Ok(AssetType::Vehicle),
            "Unknown" => Ok(AssetType::Unknown),
            other => Err(ClaimError::UnknownAssetType(other.to_string())),
        }
    }
}

/// Claim classification derived from keywords in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    Injury,
    #[serde(rename = "Property Damage")]
    PropertyDamage,
    Unknown,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Injury => "Injury",
            ClaimType::PropertyDamage => "Property Damage",
            ClaimType::Unknown => "Unknown",
        }
    }

    /// Returns true when no classification keyword was found
    pub fn is_unknown(&self) -> bool {
        matches!(self, ClaimType::Unknown)
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimType {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Injury" => Ok(ClaimType::Injury),
            "Property Damage" => Ok(ClaimType::PropertyDamage),
            "Unknown" => Ok(ClaimType::Unknown),
            other => Err(ClaimError::UnknownClaimType(other.to_string())),
        }
    }
}

/// Policy information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyInfo {
    pub policy_number: Option<String>,
    pub policyholder_name: Option<String>,
    /// `MM/DD/YYYY`
    pub effective_dates: Option<String>,
}

/// When, where and how the loss happened
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentInfo {
    /// Date of loss, `MM/DD/YYYY`
    pub date: Option<String>,
    /// `H:MM` or `HH:MM`, optionally followed by AM/PM
    pub time: Option<String>,
    pub location: Option<String>,
    /// Accident narrative with whitespace collapsed
    pub description: Option<String>,
}

/// People involved in the loss
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvolvedParties {
    pub claimant: Option<String>,
    /// Reserved; only the claimant is extracted today
    pub third_parties: Vec<String>,
    /// Reserved
    pub contact_details: Option<String>,
}

/// The damaged asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDetails {
    pub asset_type: AssetType,
    pub asset_id_vin: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub estimated_damage: Option<f64>,
}

impl Default for AssetDetails {
    fn default() -> Self {
        Self {
            asset_type: AssetType::Unknown,
            asset_id_vin: None,
            make: None,
            model: None,
            year: None,
            estimated_damage: None,
        }
    }
}

/// Classification and administrative metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandatoryOthers {
    pub claim_type: ClaimType,
    /// Reserved
    pub attachments: Vec<String>,
    /// Reserved
    pub initial_estimate: Option<f64>,
}

impl Default for MandatoryOthers {
    fn default() -> Self {
        Self {
            claim_type: ClaimType::Unknown,
            attachments: Vec::new(),
            initial_estimate: None,
        }
    }
}

/// Structured record extracted from one FNOL document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub policy_info: PolicyInfo,
    pub incident_info: IncidentInfo,
    pub involved_parties: InvolvedParties,
    pub asset_details: AssetDetails,
    pub mandatory_others: MandatoryOthers,
}

impl ExtractedRecord {
    /// Returns the claim classification
    pub fn claim_type(&self) -> ClaimType {
        self.mandatory_others.claim_type
    }

    /// Returns the accident description, if one was found
    pub fn description(&self) -> Option<&str> {
        self.incident_info.description.as_deref()
    }

    /// Returns the estimated damage amount, if one was found
    pub fn estimated_damage(&self) -> Option<f64> {
        self.asset_details.estimated_damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_has_unknown_sentinels() {
        let record = ExtractedRecord::default();

        assert_eq!(record.asset_details.asset_type, AssetType::Unknown);
        assert_eq!(record.claim_type(), ClaimType::Unknown);
        assert!(record.involved_parties.third_parties.is_empty());
        assert!(record.mandatory_others.attachments.is_empty());
    }

    #[test]
    fn test_claim_type_display_matches_serialized_form() {
        for claim_type in [ClaimType::Injury, ClaimType::PropertyDamage, ClaimType::Unknown] {
            let json = serde_json::to_string(&claim_type).unwrap();
            assert_eq!(json, format!("\"{}\"", claim_type));
            assert_eq!(claim_type.as_str().parse::<ClaimType>().unwrap(), claim_type);
        }
    }
}
