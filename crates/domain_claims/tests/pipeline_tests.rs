//! End-to-end tests: FNOL text in, routing decision out

use proptest::prelude::*;

use core_kernel::encoding::to_report_string;
use domain_claims::pipeline::process_document;
use domain_claims::record::ClaimType;
use domain_claims::routing::{MandatoryField, Route, RoutingDecision};
use test_utils::{
    assert_complete, assert_missing_fields, assert_route, assert_routed, estimate_amount_strategy,
    format_estimate, incomplete_document, labels, noise_strategy, shuffled_complete_document,
    FnolDocumentBuilder, FnolFixtures,
};

// ============================================================================
// Scenarios
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_document_without_classification_keywords_needs_review() {
        let decision = process_document(&FnolFixtures::unclassified());

        assert_eq!(decision.extracted_fields.mandatory_others.claim_type, ClaimType::Unknown);
        assert_eq!(decision.extracted_fields.incident_info.description.as_deref(), Some("Minor fender bender"));
        assert_missing_fields(&decision, &["claim_type"]);
        assert_routed(&decision, Route::ManualReview, "Missing mandatory fields: claim_type");
    }

    #[test]
    fn test_collision_under_limit_is_fast_tracked() {
        let decision = process_document(&FnolFixtures::fast_track());

        assert_eq!(decision.extracted_fields.mandatory_others.claim_type, ClaimType::PropertyDamage);
        assert_eq!(decision.extracted_fields.asset_details.estimated_damage, Some(5000.0));
        assert_complete(&decision);
        assert_routed(&decision, Route::FastTrack, "Estimated damage under $25,000.");
    }

    #[test]
    fn test_staged_accident_is_flagged_regardless_of_damage() {
        for estimate in ["$500", "$24,999", "$250,000"] {
            let decision = process_document(&FnolFixtures::staged(estimate));

            assert_complete(&decision);
            assert_routed(&decision, Route::InvestigationFlag, "Suspicious keywords found in description.");
        }
    }

    #[test]
    fn test_injury_goes_to_specialist() {
        let decision = process_document(&FnolFixtures::injury());

        assert_eq!(decision.extracted_fields.mandatory_others.claim_type, ClaimType::Injury);
        assert_routed(&decision, Route::SpecialistQueue, "Claim involves injury.");
    }

    #[test]
    fn test_injury_mentioned_outside_description_goes_to_specialist() {
        let text = FnolDocumentBuilder::new()
            .with_preamble_line("INJURY REPORTED: YES")
            .build();

        assert_route(&process_document(&text), Route::SpecialistQueue);
    }

    #[test]
    fn test_description_below_its_label_is_fast_tracked() {
        let text = FnolDocumentBuilder::new()
            .with_description("\nVehicle collision at the light")
            .build();
        let decision = process_document(&text);

        assert_complete(&decision);
        assert_routed(&decision, Route::FastTrack, "Estimated damage under $25,000.");
    }

    #[test]
    fn test_huge_estimate_round_trips_as_null() {
        let text = FnolDocumentBuilder::new()
            .with_estimate(format!("${}", "9".repeat(400)))
            .build();
        let decision = process_document(&text);

        let rendered = to_report_string(&decision).unwrap();
        let parsed: RoutingDecision = serde_json::from_str(&rendered).unwrap();

        assert_eq!(decision.extracted_fields.asset_details.estimated_damage, None);
        assert_eq!(parsed, decision);
        assert_routed(&decision, Route::ManualReview, "High or missing damage estimate.");
    }

    #[test]
    fn test_high_damage_needs_review() {
        let decision = process_document(&FnolFixtures::high_damage());

        assert_complete(&decision);
        assert_routed(&decision, Route::ManualReview, "High or missing damage estimate.");
    }

    #[test]
    fn test_missing_estimate_needs_review() {
        let decision = process_document(&FnolFixtures::no_estimate());

        assert_eq!(decision.extracted_fields.asset_details.estimated_damage, None);
        assert_routed(&decision, Route::ManualReview, "High or missing damage estimate.");
    }

    #[test]
    fn test_blank_document_misses_every_mandatory_field() {
        let decision = process_document(&FnolFixtures::blank());

        assert_missing_fields(
            &decision,
            &["policy_number", "date", "location", "claim_type", "description", "claimant", "vin"],
        );
        assert_routed(
            &decision,
            Route::ManualReview,
            "Missing mandatory fields: policy_number, date, location, claim_type, description, claimant, vin",
        );
    }

    #[test]
    fn test_malformed_date_counts_as_missing() {
        let text = FnolDocumentBuilder::new()
            .with_field(labels::DATE_OF_LOSS, "Jan 2nd")
            .build();

        assert_missing_fields(&process_document(&text), &["date"]);
    }
}

// ============================================================================
// Rendered Output
// ============================================================================

mod rendering_tests {
    use super::*;

    #[test]
    fn test_rendered_decision_layout() {
        let rendered = to_report_string(&process_document(&FnolFixtures::fast_track())).unwrap();

        let expected = r#"{
  "extractedFields": {
    "policy_info": {
      "policy_number": "ABC-123",
      "policyholder_name": "Jane Doe",
      "effective_dates": "01/01/2024"
    },
    "incident_info": {
      "date": "01/02/2024",
      "time": "3:45 PM",
      "location": "Main St",
      "description": "Low speed collision at a stop light"
    },
    "involved_parties": {
      "claimant": "Jane Doe",
      "third_parties": [],
      "contact_details": null
    },
    "asset_details": {
      "asset_type": "Vehicle",
      "asset_id_vin": "1HGCM82633A004352",
      "make": "Toyota",
      "model": "Camry-LE",
      "year": "2019",
      "estimated_damage": 5000.0
    },
    "mandatory_others": {
      "claim_type": "Property Damage",
      "attachments": [],
      "initial_estimate": null
    }
  },
  "missingFields": [],
  "recommendedRoute": "Fast-track",
  "reasoning": "Estimated damage under $25,000."
}"#;

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_rendered_missing_fields_list() {
        let text = FnolDocumentBuilder::new().without(labels::VIN).without(labels::POLICY_NUMBER).build();
        let rendered = to_report_string(&process_document(&text)).unwrap();

        assert!(rendered.contains("  \"missingFields\": [\n    \"policy_number\",\n    \"vin\"\n  ],\n"));
    }

    #[test]
    fn test_rendered_decision_parses_back() {
        let text = FnolDocumentBuilder::new()
            .with_field(labels::NAME_OF_INSURED, "José \"Pepe\" Núñez")
            .without(labels::YEAR)
            .build();
        let decision = process_document(&text);

        let rendered = to_report_string(&decision).unwrap();
        let parsed: RoutingDecision = serde_json::from_str(&rendered).unwrap();

        assert!(rendered.is_ascii());
        assert_eq!(parsed, decision);
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_missing_policy_number_forces_manual_review(builder in shuffled_complete_document()) {
        let decision = process_document(&builder.without(labels::POLICY_NUMBER).build());

        prop_assert!(decision.missing_fields.contains(&MandatoryField::PolicyNumber));
        prop_assert_eq!(decision.recommended_route, Route::ManualReview);
    }

    #[test]
    fn prop_complete_documents_never_miss_fields(builder in shuffled_complete_document()) {
        let decision = process_document(&builder.build());

        prop_assert!(decision.missing_fields.is_empty());
        prop_assert_eq!(decision.recommended_route, Route::FastTrack);
    }

    #[test]
    fn prop_missing_fields_follow_check_order((builder, dropped) in incomplete_document()) {
        let decision = process_document(&builder.build());

        // Without its description a builder document loses its only
        // classification keyword, so claim_type goes missing as well.
        let expected: Vec<&str> = [
            (labels::POLICY_NUMBER, "policy_number"),
            (labels::DATE_OF_LOSS, "date"),
            (labels::LOCATION_OF_LOSS, "location"),
            (labels::DESCRIPTION_OF_ACCIDENT, "claim_type"),
            (labels::DESCRIPTION_OF_ACCIDENT, "description"),
            (labels::DRIVERS_NAME, "claimant"),
            (labels::VIN, "vin"),
        ]
        .into_iter()
        .filter(|(label, _)| dropped.contains(label))
        .map(|(_, name)| name)
        .collect();
        let actual: Vec<&str> = decision.missing_fields.iter().map(|f| f.as_str()).collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(decision.recommended_route, Route::ManualReview);
    }

    #[test]
    fn prop_estimate_decides_between_fast_track_and_review(amount in estimate_amount_strategy()) {
        let text = FnolDocumentBuilder::new().with_estimate(format_estimate(amount)).build();
        let decision = process_document(&text);

        prop_assert_eq!(decision.extracted_fields.asset_details.estimated_damage, Some(f64::from(amount)));
        let expected = if amount < 25_000 { Route::FastTrack } else { Route::ManualReview };
        prop_assert_eq!(decision.recommended_route, expected);
    }

    #[test]
    fn prop_processing_is_idempotent(text in noise_strategy()) {
        let first = to_report_string(&process_document(&text)).unwrap();
        let second = to_report_string(&process_document(&text)).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_arbitrary_text_always_routes(text in noise_strategy()) {
        let decision = process_document(&text);

        prop_assert_eq!(decision.missing_fields.is_empty(), decision.reasoning.ends_with('.'));
    }
}
