//! Claim routing
//!
//! Routing runs in two stages, each an ordered table evaluated top to
//! bottom:
//!
//! 1. [`MANDATORY_CHECKS`]: every check runs and every failure is
//!    collected, in table order.
//! 2. [`ROUTING_RULES`]: consulted only when no mandatory field is missing;
//!    the first rule whose predicate holds selects the route.
//!
//! ```text
//! missing fields?  -> Manual Review
//! fraud keywords?  -> Investigation Flag
//! injury?          -> Specialist Queue
//! damage < 25,000? -> Fast-track
//! otherwise        -> Manual Review
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::error::ClaimError;
use crate::record::{ClaimType, ExtractedRecord};

/// Damage estimates strictly below this amount qualify for fast-track
pub const FAST_TRACK_LIMIT: f64 = 25_000.0;

/// Description keywords that flag a claim for investigation
pub const SUSPICIOUS_KEYWORDS: [&str; 3] = ["fraud", "staged", "inconsistent"];

/// Downstream processing queue for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "Manual Review")]
    ManualReview,
    #[serde(rename = "Investigation Flag")]
    InvestigationFlag,
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,
    #[serde(rename = "Fast-track")]
    FastTrack,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::ManualReview => "Manual Review",
            Route::InvestigationFlag => "Investigation Flag",
            Route::SpecialistQueue => "Specialist Queue",
            Route::FastTrack => "Fast-track",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manual Review" => Ok(Route::ManualReview),
            "Investigation Flag" => Ok(Route::InvestigationFlag),
            "Specialist Queue" => Ok(Route::SpecialistQueue),
            "Fast-track" => Ok(Route::FastTrack),
            other => Err(ClaimError::UnknownRoute(other.to_string())),
        }
    }
}

/// A field whose absence forces manual review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MandatoryField {
    PolicyNumber,
    Date,
    Location,
    ClaimType,
    Description,
    Claimant,
    Vin,
}

impl MandatoryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MandatoryField::PolicyNumber => "policy_number",
            MandatoryField::Date => "date",
            MandatoryField::Location => "location",
            MandatoryField::ClaimType => "claim_type",
            MandatoryField::Description => "description",
            MandatoryField::Claimant => "claimant",
            MandatoryField::Vin => "vin",
        }
    }
}

impl fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MandatoryField {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MANDATORY_CHECKS
            .iter()
            .map(|check| check.field)
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ClaimError::UnknownMandatoryField(s.to_string()))
    }
}

/// A mandatory-field check: the field is reported when `is_missing` holds
#[derive(Debug, Clone, Copy)]
pub struct MandatoryCheck {
    pub field: MandatoryField,
    pub is_missing: fn(&ExtractedRecord) -> bool,
}

/// Mandatory-field checks in evaluation (and reporting) order
pub static MANDATORY_CHECKS: [MandatoryCheck; 7] = [
    MandatoryCheck {
        field: MandatoryField::PolicyNumber,
        is_missing: |r| r.policy_info.policy_number.is_none(),
    },
    MandatoryCheck {
        field: MandatoryField::Date,
        is_missing: |r| r.incident_info.date.is_none(),
    },
    MandatoryCheck {
        field: MandatoryField::Location,
        is_missing: |r| r.incident_info.location.is_none(),
    },
    MandatoryCheck {
        field: MandatoryField::ClaimType,
        is_missing: |r| r.claim_type().is_unknown(),
    },
    MandatoryCheck {
        field: MandatoryField::Description,
        is_missing: |r| r.incident_info.description.is_none(),
    },
    MandatoryCheck {
        field: MandatoryField::Claimant,
        is_missing: |r| r.involved_parties.claimant.is_none(),
    },
    MandatoryCheck {
        field: MandatoryField::Vin,
        is_missing: |r| r.asset_details.asset_id_vin.is_none(),
    },
];

/// A routing rule: when `applies` holds, the claim goes to `route`
#[derive(Debug, Clone, Copy)]
pub struct RoutingRule {
    pub name: &'static str,
    pub applies: fn(&ExtractedRecord) -> bool,
    pub route: Route,
    pub reason: &'static str,
}

/// Routing rules in precedence order; the last rule always applies
pub static ROUTING_RULES: [RoutingRule; 4] = [
    RoutingRule {
        name: "suspicious_description",
        applies: has_suspicious_description,
        route: Route::InvestigationFlag,
        reason: "Suspicious keywords found in description.",
    },
    RoutingRule {
        name: "injury",
        applies: |r| r.claim_type() == ClaimType::Injury,
        route: Route::SpecialistQueue,
        reason: "Claim involves injury.",
    },
    RoutingRule {
        name: "low_damage",
        applies: |r| r.estimated_damage().is_some_and(|amount| amount < FAST_TRACK_LIMIT),
        route: Route::FastTrack,
        reason: "Estimated damage under $25,000.",
    },
    RoutingRule {
        name: "default",
        applies: |_| true,
        route: Route::ManualReview,
        reason: "High or missing damage estimate.",
    },
];

fn has_suspicious_description(record: &ExtractedRecord) -> bool {
    record.description().is_some_and(|description| {
        let lowered = description.to_lowercase();
        SUSPICIOUS_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
    })
}

/// Outcome of routing one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingDecision {
    pub extracted_fields: ExtractedRecord,
    pub missing_fields: Vec<MandatoryField>,
    pub recommended_route: Route,
    pub reasoning: String,
}

/// Returns the mandatory fields absent from `record`, in check order
pub fn missing_fields(record: &ExtractedRecord) -> Vec<MandatoryField> {
    MANDATORY_CHECKS
        .iter()
        .filter(|check| (check.is_missing)(record))
        .map(|check| check.field)
        .collect()
}

/// Returns the first routing rule that applies to `record`
pub fn select_rule(record: &ExtractedRecord) -> &'static RoutingRule {
    let last = ROUTING_RULES.len() - 1;
    ROUTING_RULES
        .iter()
        .find(|rule| (rule.applies)(record))
        .unwrap_or(&ROUTING_RULES[last])
}

/// Routes an extracted claim
pub fn route_claim(record: ExtractedRecord) -> RoutingDecision {
    let _span = info_span!("route_claim").entered();

    let missing = missing_fields(&record);
    let (route, reasoning) = if missing.is_empty() {
        let rule = select_rule(&record);
        info!(rule = rule.name, route = %rule.route, "claim routed");
        (rule.route, rule.reason.to_string())
    } else {
        let names: Vec<&str> = missing.iter().map(MandatoryField::as_str).collect();
        info!(missing = ?names, "claim is missing mandatory fields");
        (
            Route::ManualReview,
            format!("Missing mandatory fields: {}", names.join(", ")),
        )
    };

    RoutingDecision {
        extracted_fields: record,
        missing_fields: missing,
        recommended_route: route,
        reasoning,
    }
}
