//! Test Data Builders
//!
//! Provides a builder for FNOL documents. Tests start from a complete,
//! fast-track-eligible document and override or drop only the labels they
//! care about.

use crate::fixtures::{labels, StringFixtures};

/// Builder for FNOL document text
///
/// Each field becomes one `LABEL: value` line, emitted in insertion order
/// after an optional free-text preamble.
#[derive(Debug, Clone)]
pub struct FnolDocumentBuilder {
    preamble: Vec<String>,
    fields: Vec<(&'static str, String)>,
}

impl Default for FnolDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FnolDocumentBuilder {
    /// Creates a builder for a complete property-damage claim under the
    /// fast-track limit
    pub fn new() -> Self {
        Self {
            preamble: vec![StringFixtures::form_title().to_string()],
            fields: vec![
                (labels::POLICY_NUMBER, StringFixtures::policy_number().to_string()),
                (labels::NAME_OF_INSURED, StringFixtures::insured_name().to_string()),
                (labels::EFFECTIVE_DATE, "01/01/2024".to_string()),
                (labels::DATE_OF_LOSS, "01/02/2024".to_string()),
                (labels::TIME, "3:45 PM".to_string()),
                (labels::LOCATION_OF_LOSS, StringFixtures::location().to_string()),
                (labels::DESCRIPTION_OF_ACCIDENT, StringFixtures::collision_description().to_string()),
                (labels::DRIVERS_NAME, StringFixtures::insured_name().to_string()),
                (labels::VIN, StringFixtures::vin().to_string()),
                (labels::MAKE, "Toyota".to_string()),
                (labels::MODEL, "Camry-LE".to_string()),
                (labels::YEAR, "2019".to_string()),
                (labels::ESTIMATE_AMOUNT, "$5,000".to_string()),
            ],
        }
    }

    /// Creates a builder with no preamble and no fields
    pub fn empty() -> Self {
        Self {
            preamble: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Sets a field value, replacing an existing line for the same label
    pub fn with_field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((label, value)),
        }
        self
    }

    /// Removes the line for a label
    pub fn without(mut self, label: &str) -> Self {
        self.fields.retain(|(existing, _)| *existing != label);
        self
    }

    /// Sets the accident description
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_field(labels::DESCRIPTION_OF_ACCIDENT, description)
    }

    /// Sets the estimate amount text
    pub fn with_estimate(self, amount: impl Into<String>) -> Self {
        self.with_field(labels::ESTIMATE_AMOUNT, amount)
    }

    /// Appends a free-text line to the preamble
    pub fn with_preamble_line(mut self, line: impl Into<String>) -> Self {
        self.preamble.push(line.into());
        self
    }

    /// Reorders field lines; `order` holds indices into the current order
    pub fn reordered(mut self, order: &[usize]) -> Self {
        let reordered = order
            .iter()
            .filter_map(|index| self.fields.get(*index).cloned())
            .collect();
        self.fields = reordered;
        self
    }

    /// Reverses the order of field lines
    pub fn reversed(mut self) -> Self {
        self.fields.reverse();
        self
    }

    /// Returns the number of field lines
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Builds the document text
    pub fn build(&self) -> String {
        let mut lines = self.preamble.clone();
        lines.extend(
            self.fields
                .iter()
                .map(|(label, value)| format!("{} {}", label, value)),
        );
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_field_replaces_existing_line() {
        let text = FnolDocumentBuilder::empty()
            .with_field(labels::MAKE, "Ford")
            .with_field(labels::MAKE, "Honda")
            .build();

        assert_eq!(text, "MAKE: Honda\n");
    }

    #[test]
    fn test_without_drops_line() {
        let builder = FnolDocumentBuilder::new().without(labels::VIN);

        assert!(!builder.build().contains("V.I.N.:"));
        assert_eq!(builder.field_count(), 12);
    }

    #[test]
    fn test_reversed_keeps_every_line() {
        let forward = FnolDocumentBuilder::new();
        let backward = forward.clone().reversed();

        assert_eq!(forward.build().len(), backward.build().len());
        assert_ne!(forward.build(), backward.build());
    }
}
