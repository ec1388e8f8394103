//! Loose conformance evaluation over extracted fields.
//!
//! "Loose" means the verdict is computed from whatever the extraction
//! engine produced, regardless of dialect. The mandatory universe is
//! the batch-wide union of observed field names filtered through the
//! obligation table, so a field no document in the batch carries can
//! never appear as missing.

use geomd_model::{ComplianceResult, ExtractedFields, Obligation};

use crate::obligation::{FIELD_OBLIGATION, classify};

/// Evaluate one document against the batch's field-name universe.
///
/// `field_names` is the union of field names observed across the batch.
/// Present counts cover the whole universe; the missing list follows
/// the obligation table's order, not the universe's.
pub fn evaluate(fields: &ExtractedFields, field_names: &[String]) -> ComplianceResult {
    let mut result = ComplianceResult::default();
    for name in field_names {
        if !fields.has_value(name) {
            continue;
        }
        match classify(name) {
            Obligation::Mandatory => result.present_mandatory += 1,
            Obligation::Conditional => result.present_conditional += 1,
            Obligation::Optional => result.present_optional += 1,
        }
    }
    // Every mandatory name comes from the table, so walking it keeps
    // the missing list in table order regardless of universe sorting.
    for (name, obligation) in FIELD_OBLIGATION {
        if obligation.is_mandatory()
            && field_names.iter().any(|candidate| candidate == name)
            && !fields.has_value(name)
        {
            result.missing_mandatory.push((*name).to_string());
        }
    }
    result.conformant = result.missing_mandatory.is_empty();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe() -> Vec<String> {
        [
            "Abstract",
            "ArcGIS Format",
            "Keywords",
            "Publication Date",
            "Resource Title",
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }

    #[test]
    fn missing_mandatory_fields_are_reported() {
        let mut fields = ExtractedFields::new();
        fields.add("Resource Title", "Soils of England");
        let result = evaluate(&fields, &universe());
        assert!(!result.conformant);
        assert_eq!(result.missing_mandatory, vec!["Abstract", "Keywords"]);
        assert_eq!(result.present_mandatory, 1);
    }

    #[test]
    fn missing_list_follows_obligation_table_order() {
        // alphabetical order would put Abstract first; the table lists
        // Resource Title before it
        let mut fields = ExtractedFields::new();
        fields.add("Keywords", "Soil");
        let result = evaluate(&fields, &universe());
        assert_eq!(result.missing_mandatory, vec!["Resource Title", "Abstract"]);
    }

    #[test]
    fn all_mandatory_present_is_conformant() {
        let mut fields = ExtractedFields::new();
        fields.add("Resource Title", "Soils of England");
        fields.add("Abstract", "A soil map.");
        fields.add("Keywords", "Soil, Land use");
        let result = evaluate(&fields, &universe());
        assert!(result.conformant);
        assert!(result.missing_mandatory.is_empty());
        assert_eq!(result.present_mandatory, 3);
    }

    #[test]
    fn blank_values_do_not_count_as_present() {
        let mut fields = ExtractedFields::new();
        fields.add("Resource Title", "  ");
        let result = evaluate(&fields, &universe());
        assert!(result.missing_mandatory.contains(&"Resource Title".to_string()));
    }

    #[test]
    fn conditional_and_optional_fields_never_block_conformance() {
        let mut fields = ExtractedFields::new();
        fields.add("Resource Title", "t");
        fields.add("Abstract", "a");
        fields.add("Keywords", "k");
        fields.add("Publication Date", "2020-01-01");
        fields.add("ArcGIS Format", "1.0");
        let result = evaluate(&fields, &universe());
        assert!(result.conformant);
        assert_eq!(result.present_conditional, 1);
        assert_eq!(result.present_optional, 1);
    }

    #[test]
    fn fields_outside_the_universe_are_ignored() {
        let mut fields = ExtractedFields::new();
        fields.add("Lineage Statement", "derived from survey data");
        let result = evaluate(&fields, &universe());
        // Lineage Statement is mandatory but not in this batch's universe
        assert!(!result.missing_mandatory.contains(&"Lineage Statement".to_string()));
        assert_eq!(result.present_mandatory, 0);
    }
}
