//! Per-document extracted field mapping.
//!
//! Insertion order is preserved: the first file processed in a batch
//! controls column ordering in the export, so the mapping must be
//! deterministic for a given document structure.

use serde::{Deserialize, Serialize};

/// Separator used when the same field is set more than once.
pub const APPEND_SEPARATOR: &str = " | ";

/// Ordered mapping from display field name to extracted string value.
///
/// A field absent from the mapping is semantically "Absent"; empty values
/// are never inserted. Multi-occurrence fields are folded into one entry
/// joined by a fixed separator, never stored as a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedFields {
    entries: Vec<(String, String)>,
}

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a non-empty value. If the field already exists the value is
    /// appended with `" | "`, matching repeated-element folding.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| n == name) {
            if existing.is_empty() {
                *existing = value;
            } else {
                existing.push_str(APPEND_SEPARATOR);
                existing.push_str(&value);
            }
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Value for a field, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// True if the field is present with non-blank content.
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.trim().is_empty())
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// (name, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_insertion_order() {
        let mut fields = ExtractedFields::new();
        fields.add("Resource Title", "Soils of England");
        fields.add("Abstract", "A soil map.");
        fields.add("Keywords", "Soil, Land use");
        let names: Vec<&str> = fields.names().collect();
        assert_eq!(names, vec!["Resource Title", "Abstract", "Keywords"]);
    }

    #[test]
    fn duplicate_add_appends_with_separator() {
        let mut fields = ExtractedFields::new();
        fields.add("Use Limitation", "Non-commercial use");
        fields.add("Use Limitation", "Attribution required");
        assert_eq!(
            fields.get("Use Limitation"),
            Some("Non-commercial use | Attribution required")
        );
    }

    #[test]
    fn empty_values_are_never_inserted() {
        let mut fields = ExtractedFields::new();
        fields.add("Abstract", "");
        assert!(fields.get("Abstract").is_none());
        assert!(fields.is_empty());
    }

    #[test]
    fn has_value_requires_non_blank() {
        let mut fields = ExtractedFields::new();
        fields.add("Credit", "  ");
        // blank-only strings are still inserted verbatim, but do not count
        assert!(!fields.has_value("Credit"));
        fields.add("Purpose", "Mapping");
        assert!(fields.has_value("Purpose"));
    }
}
