//! Conformance outcomes shared by the loose and strict evaluators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single strict conformance check.
///
/// Distinguishes a node path that did not resolve (Absent) from a node
/// that resolved but carried no text (Empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckOutcome {
    Present,
    Empty,
    Absent,
}

impl CheckOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckOutcome::Present => "Present",
            CheckOutcome::Empty => "Empty",
            CheckOutcome::Absent => "Absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, CheckOutcome::Present)
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-document conformance verdict.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// True iff every mandatory field is present with non-empty content.
    pub conformant: bool,
    /// Missing mandatory field display names, in catalog order.
    pub missing_mandatory: Vec<String>,
    /// Count of present mandatory fields.
    pub present_mandatory: usize,
    /// Count of present conditional fields.
    pub present_conditional: usize,
    /// Count of present optional fields.
    pub present_optional: usize,
}

impl ComplianceResult {
    pub fn missing_count(&self) -> usize {
        self.missing_mandatory.len()
    }

    /// "Yes"/"No" string for report cells.
    pub fn conformant_label(&self) -> &'static str {
        if self.conformant { "Yes" } else { "No" }
    }
}

/// A document excluded from classification, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkipRecord {
    pub filename: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_outcome_labels() {
        assert_eq!(CheckOutcome::Present.as_str(), "Present");
        assert_eq!(CheckOutcome::Empty.as_str(), "Empty");
        assert_eq!(CheckOutcome::Absent.as_str(), "Absent");
        assert!(CheckOutcome::Present.is_present());
        assert!(!CheckOutcome::Empty.is_present());
    }

    #[test]
    fn conformant_label() {
        let mut result = ComplianceResult {
            conformant: true,
            ..ComplianceResult::default()
        };
        assert_eq!(result.conformant_label(), "Yes");
        result.conformant = false;
        result.missing_mandatory.push("Keywords".to_string());
        assert_eq!(result.conformant_label(), "No");
        assert_eq!(result.missing_count(), 1);
    }
}
