//! Pre-built Test Fixtures
//!
//! Label constants and canned FNOL documents for the scenarios the router
//! distinguishes.

use crate::builders::FnolDocumentBuilder;

/// Field labels as they appear in FNOL forms
pub mod labels {
    pub const POLICY_NUMBER: &str = "POLICY NUMBER:";
    pub const NAME_OF_INSURED: &str = "NAME OF INSURED:";
    pub const EFFECTIVE_DATE: &str = "EFFECTIVE DATE:";
    pub const DATE_OF_LOSS: &str = "DATE OF LOSS:";
    pub const TIME: &str = "TIME:";
    pub const LOCATION_OF_LOSS: &str = "LOCATION OF LOSS:";
    pub const DESCRIPTION_OF_ACCIDENT: &str = "DESCRIPTION OF ACCIDENT:";
    pub const DRIVERS_NAME: &str = "DRIVER'S NAME:";
    pub const VIN: &str = "V.I.N.:";
    pub const MAKE: &str = "MAKE:";
    pub const MODEL: &str = "MODEL:";
    pub const YEAR: &str = "YEAR:";
    pub const ESTIMATE_AMOUNT: &str = "ESTIMATE AMOUNT:";

    /// Labels of the mandatory fields, in the router's check order.
    ///
    /// Claim type has no label of its own; it is driven by the description
    /// in builder-made documents.
    pub const MANDATORY: [&str; 6] = [
        POLICY_NUMBER,
        DATE_OF_LOSS,
        LOCATION_OF_LOSS,
        DESCRIPTION_OF_ACCIDENT,
        DRIVERS_NAME,
        VIN,
    ];
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    pub fn form_title() -> &'static str {
        "AUTOMOBILE LOSS NOTICE"
    }

    pub fn policy_number() -> &'static str {
        "ABC-123"
    }

    pub fn insured_name() -> &'static str {
        "Jane Doe"
    }

    pub fn location() -> &'static str {
        "Main St"
    }

    pub fn vin() -> &'static str {
        "1HGCM82633A004352"
    }

    /// Description that classifies the claim as property damage
    pub fn collision_description() -> &'static str {
        "Low speed collision at a stop light"
    }

    /// Description with no classification keywords
    pub fn neutral_description() -> &'static str {
        "Minor fender bender"
    }
}

/// Canned FNOL documents
pub struct FnolFixtures;

impl FnolFixtures {
    /// Complete document whose text never mentions injury, collision or
    /// damage, so the claim type stays unknown
    pub fn unclassified() -> String {
        FnolDocumentBuilder::new()
            .with_description(StringFixtures::neutral_description())
            .build()
    }

    /// Complete property-damage claim estimated at $5,000
    pub fn fast_track() -> String {
        FnolDocumentBuilder::new().build()
    }

    /// Complete claim whose description reads as staged
    pub fn staged(estimate: &str) -> String {
        FnolDocumentBuilder::new()
            .with_description("Possible staged accident with collision at the light")
            .with_estimate(estimate)
            .build()
    }

    /// Complete injury claim with no suspicious wording
    pub fn injury() -> String {
        FnolDocumentBuilder::new()
            .with_description("Rear-end collision, driver reports neck injury")
            .build()
    }

    /// Complete property-damage claim above the fast-track limit
    pub fn high_damage() -> String {
        FnolDocumentBuilder::new().with_estimate("$48,250").build()
    }

    /// Complete property-damage claim with no estimate
    pub fn no_estimate() -> String {
        FnolDocumentBuilder::new()
            .without(labels::ESTIMATE_AMOUNT)
            .build()
    }

    /// Document with none of the expected labels
    pub fn blank() -> String {
        "Caller phoned in about an incident; details to follow.\n".to_string()
    }
}
