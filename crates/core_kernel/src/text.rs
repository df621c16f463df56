//! Label-oriented pattern matching over free text
//!
//! FNOL documents are loosely formatted forms: each field is introduced by
//! an upper-case label ending in a colon (`POLICY NUMBER:`), followed by the
//! value on the same or the next line. A [`LabelPattern`] pairs such a label
//! with a value pattern and finds the first occurrence anywhere in a
//! document.
//!
//! Labels match case-insensitively over ASCII only, and matching never
//! consumes text, so every pattern sees the whole document independently of
//! the others.

use regex::{Match, Regex, RegexBuilder};

use crate::error::CoreError;

/// Any ASCII whitespace, line breaks included.
const ANY_GAP: &str = r"(?-u:\s*)";

/// Spaces and tabs only, so a blank label cannot reach the next line.
const SAME_LINE_GAP: &str = r"(?-u:[ \t]*)";

/// Where a label occurrence sits in the text
#[derive(Debug, Clone, Copy)]
pub struct LabelMatch<'t> {
    /// Whitespace between the colon and the value
    pub gap: Match<'t>,
    /// The raw value capture
    pub value: Match<'t>,
}

/// A compiled `LABEL: value` pattern
#[derive(Debug, Clone)]
pub struct LabelPattern {
    label: String,
    regex: Regex,
}

impl LabelPattern {
    /// Compiles a pattern for `label` followed by any whitespace (line
    /// breaks included) and a value matching `value`.
    ///
    /// The label is matched literally (dots and apostrophes need no
    /// escaping by the caller). `value` is a regular expression fragment
    /// and must not contain its own capture groups.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Pattern`] if the value fragment is not a valid
    /// regular expression.
    pub fn new(label: &str, value: &str) -> Result<Self, CoreError> {
        Self::build(label, ANY_GAP, value)
    }

    /// Like [`LabelPattern::new`], but the value must start on the label's
    /// own line.
    pub fn same_line(label: &str, value: &str) -> Result<Self, CoreError> {
        Self::build(label, SAME_LINE_GAP, value)
    }

    fn build(label: &str, gap: &str, value: &str) -> Result<Self, CoreError> {
        let pattern = format!("(?-u:{})({})({})", regex::escape(label), gap, value);
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            label: label.to_string(),
            regex,
        })
    }

    /// Returns the literal label text
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Locates the first occurrence of the label
    pub fn find<'t>(&self, text: &'t str) -> Option<LabelMatch<'t>> {
        let caps = self.regex.captures(text)?;
        Some(LabelMatch {
            gap: caps.get(1)?,
            value: caps.get(2)?,
        })
    }

    /// Returns the raw value capture of the first occurrence of the label
    pub fn capture<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find(text).map(|found| found.value)
    }

    /// Returns the trimmed value of the first occurrence of the label.
    ///
    /// A value that is empty after trimming counts as absent.
    pub fn first_value(&self, text: &str) -> Option<String> {
        self.capture(text)
            .map(|m| m.as_str().trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

/// Collapses every run of whitespace (including line breaks) into a single
/// space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
