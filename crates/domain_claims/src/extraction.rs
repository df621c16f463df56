//! Field extraction from FNOL text
//!
//! Every field is an independent, case-insensitive search over the whole
//! document; the first occurrence of a label wins and nothing is consumed.
//! A label that is missing or whose value does not fit its pattern leaves
//! the field `None`. Extraction itself never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use core_kernel::text::{collapse_whitespace, LabelPattern};
use core_kernel::CoreError;

use crate::record::{
    AssetDetails, AssetType, ClaimType, ExtractedRecord, IncidentInfo, InvolvedParties,
    MandatoryOthers, PolicyInfo,
};

// Fixed-shape values are ASCII-only, so case folding never admits
// look-alikes such as the Kelvin sign.
const DATE: &str = r"(?-u:[0-9]{2}/[0-9]{2}/[0-9]{4})";
const TIME: &str = r"(?-u:[0-9]{1,2}:[0-9]{2}(?:[ \t]?(?:AM|PM))?)";
const ALPHANUMERIC: &str = r"(?-u:[A-Za-z0-9]+)";
const ALPHANUMERIC_DASHED: &str = r"(?-u:[A-Za-z0-9-]+)";
const REST_OF_LINE: &str = r".+";

/// The description ends before the first run of line breaks followed by an
/// upper-case letter, i.e. the next section header.
static DESCRIPTION_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\r\n\x0B\x0C\x{85}\x{2028}\x{2029}]+[A-Z]").expect("description terminator is a valid pattern")
});

static PATTERNS: Lazy<FieldPatterns> =
    Lazy::new(|| FieldPatterns::compile().expect("built-in FNOL field patterns are valid"));

/// Compiled label patterns for every pattern-matched field
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    policy_number: LabelPattern,
    policyholder_name: LabelPattern,
    effective_dates: LabelPattern,
    date: LabelPattern,
    time: LabelPattern,
    location: LabelPattern,
    description: LabelPattern,
    claimant: LabelPattern,
    vin: LabelPattern,
    make: LabelPattern,
    model: LabelPattern,
    year: LabelPattern,
    estimate: LabelPattern,
}

impl FieldPatterns {
    /// Compiles the built-in pattern table.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Pattern`] if any value pattern fails to compile.
    pub fn compile() -> Result<Self, CoreError> {
        Ok(Self {
            policy_number: LabelPattern::new("POLICY NUMBER:", ALPHANUMERIC_DASHED)?,
            policyholder_name: LabelPattern::same_line("NAME OF INSURED:", REST_OF_LINE)?,
            effective_dates: LabelPattern::new("EFFECTIVE DATE:", DATE)?,
            date: LabelPattern::new("DATE OF LOSS:", DATE)?,
            time: LabelPattern::new("TIME:", TIME)?,
            location: LabelPattern::same_line("LOCATION OF LOSS:", REST_OF_LINE)?,
            description: LabelPattern::new("DESCRIPTION OF ACCIDENT:", "")?,
            claimant: LabelPattern::same_line("DRIVER'S NAME:", REST_OF_LINE)?,
            vin: LabelPattern::new("V.I.N.:", ALPHANUMERIC)?,
            make: LabelPattern::new("MAKE:", ALPHANUMERIC)?,
            model: LabelPattern::new("MODEL:", ALPHANUMERIC_DASHED)?,
            year: LabelPattern::new("YEAR:", r"(?-u:[0-9]{4})")?,
            estimate: LabelPattern::new("ESTIMATE AMOUNT:", r"(?-u:\$?[0-9,]+)")?,
        })
    }
}

/// Extracts the structured record from a raw FNOL document
pub fn extract_fields(text: &str) -> ExtractedRecord {
    let patterns = &*PATTERNS;

    let policy_info = PolicyInfo {
        policy_number: field(patterns.policy_number.first_value(text), "policy_number"),
        policyholder_name: field(patterns.policyholder_name.first_value(text), "policyholder_name"),
        effective_dates: field(patterns.effective_dates.first_value(text), "effective_dates"),
    };

    let incident_info = IncidentInfo {
        date: field(patterns.date.first_value(text), "date"),
        time: field(patterns.time.first_value(text), "time"),
        location: field(patterns.location.first_value(text), "location"),
        description: field(extract_description(&patterns.description, text), "description"),
    };

    let involved_parties = InvolvedParties {
        claimant: field(patterns.claimant.first_value(text), "claimant"),
        third_parties: Vec::new(),
        contact_details: None,
    };

    let vin = field(patterns.vin.first_value(text), "asset_id_vin");
    let asset_details = AssetDetails {
        asset_type: if vin.is_some() { AssetType::Vehicle } else { AssetType::Unknown },
        asset_id_vin: vin,
        make: field(patterns.make.first_value(text), "make"),
        model: field(patterns.model.first_value(text), "model"),
        year: field(patterns.year.first_value(text), "year"),
        estimated_damage: field(
            patterns.estimate.first_value(text).and_then(|raw| parse_amount(&raw)),
            "estimated_damage",
        ),
    };

    let mandatory_others = MandatoryOthers {
        claim_type: classify_claim(text),
        attachments: Vec::new(),
        initial_estimate: None,
    };

    ExtractedRecord {
        policy_info,
        incident_info,
        involved_parties,
        asset_details,
        mandatory_others,
    }
}

/// Classifies the claim from keywords anywhere in the document.
///
/// Injury takes precedence over property damage.
pub fn classify_claim(text: &str) -> ClaimType {
    let upper = text.to_uppercase();
    if upper.contains("INJURY") {
        ClaimType::Injury
    } else if upper.contains("COLLISION") || upper.contains("DAMAGE") {
        ClaimType::PropertyDamage
    } else {
        ClaimType::Unknown
    }
}

/// Parses a currency amount such as `$12,500` into a number
pub fn parse_amount(raw: &str) -> Option<f64> {
    let digits: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    digits.parse().ok().filter(|amount: &f64| amount.is_finite())
}

/// The narrative may start on the label's line or below it. When the text
/// after the leading whitespace has no terminator but that whitespace ends
/// in a line break directly before a header, the description is empty.
fn extract_description(pattern: &LabelPattern, text: &str) -> Option<String> {
    let found = pattern.find(text)?;
    let rest = &text[found.value.start()..];
    let end = match DESCRIPTION_END.find(rest) {
        Some(terminator) => terminator.start(),
        None if ends_in_line_break(found.gap.as_str()) && starts_with_header(rest) => 0,
        None => rest.len(),
    };

    Some(collapse_whitespace(&rest[..end])).filter(|description| !description.is_empty())
}

fn ends_in_line_break(gap: &str) -> bool {
    gap.ends_with(['\n', '\r', '\x0B', '\x0C'])
}

fn starts_with_header(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_uppercase())
}

fn field<T>(value: Option<T>, name: &str) -> Option<T> {
    if value.is_none() {
        debug!(field = name, "field not found in document");
    }
    value
}
