//! Custom Test Assertions
//!
//! Assertion helpers for routing decisions that print the whole decision
//! on failure.

use domain_claims::{Route, RoutingDecision};

/// Asserts the recommended route
pub fn assert_route(decision: &RoutingDecision, expected: Route) {
    assert_eq!(
        decision.recommended_route, expected,
        "Unexpected route {} (reasoning: {:?}), decision: {:#?}",
        decision.recommended_route, decision.reasoning, decision
    );
}

/// Asserts route and reasoning together
pub fn assert_routed(decision: &RoutingDecision, expected: Route, reasoning: &str) {
    assert_route(decision, expected);
    assert_eq!(decision.reasoning, reasoning);
}

/// Asserts the exact list of missing mandatory fields, by rendered name
pub fn assert_missing_fields(decision: &RoutingDecision, expected: &[&str]) {
    let actual: Vec<&str> = decision.missing_fields.iter().map(|f| f.as_str()).collect();
    assert_eq!(actual, expected, "Missing fields differ, decision: {:#?}", decision);
}

/// Asserts that no mandatory field is missing
pub fn assert_complete(decision: &RoutingDecision) {
    assert_missing_fields(decision, &[]);
}
