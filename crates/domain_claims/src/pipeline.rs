//! End-to-end FNOL processing

use tracing::info_span;

use crate::extraction::extract_fields;
use crate::routing::{route_claim, RoutingDecision};

/// Extracts and routes one FNOL document.
///
/// Pure and total: the same text always yields the same decision, and
/// incomplete documents are routed to manual review rather than rejected.
pub fn process_document(text: &str) -> RoutingDecision {
    let _span = info_span!("process_document", bytes = text.len()).entered();

    let record = extract_fields(text);
    route_claim(record)
}
