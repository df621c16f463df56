//! Property-Based Test Generators
//!
//! Provides proptest strategies for FNOL documents: complete documents with
//! shuffled label order, documents with an arbitrary subset of mandatory
//! labels removed, and unstructured noise.

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::builders::FnolDocumentBuilder;
use crate::fixtures::labels;

/// Strategy for a permutation of `0..len`
pub fn permutation_strategy(len: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((0..len).collect::<Vec<_>>()).prop_shuffle()
}

/// Strategy for a complete document with its lines in random order
pub fn shuffled_complete_document() -> impl Strategy<Value = FnolDocumentBuilder> {
    let builder = FnolDocumentBuilder::new();
    permutation_strategy(builder.field_count())
        .prop_map(move |order| builder.clone().reordered(&order))
}

/// Strategy for a non-empty set of mandatory labels to drop
pub fn dropped_mandatory_labels() -> impl Strategy<Value = Vec<&'static str>> {
    subsequence(labels::MANDATORY.to_vec(), 1..=labels::MANDATORY.len())
}

/// Strategy for a shuffled document with some mandatory labels removed.
///
/// Yields the builder and the labels that were dropped.
pub fn incomplete_document() -> impl Strategy<Value = (FnolDocumentBuilder, Vec<&'static str>)> {
    (shuffled_complete_document(), dropped_mandatory_labels()).prop_map(|(builder, dropped)| {
        let builder = dropped
            .iter()
            .fold(builder, |builder, label| builder.without(label));
        (builder, dropped)
    })
}

/// Strategy for whole-dollar estimate amounts
pub fn estimate_amount_strategy() -> impl Strategy<Value = u32> {
    0u32..200_000u32
}

/// Formats an amount the way FNOL forms do, e.g. `$12,500`
pub fn format_estimate(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${}", grouped)
}

/// Strategy for arbitrary text, including non-ASCII and control characters
pub fn noise_strategy() -> impl Strategy<Value = String> {
    any::<String>()
}
