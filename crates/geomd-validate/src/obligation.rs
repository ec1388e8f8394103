//! The obligation table for exported field names.
//!
//! Keys match the display names produced by the extraction engine.
//! Anything not listed (vendor housekeeping fields, optional contact
//! details, thesaurus-qualified keyword groups) is optional.

use geomd_model::Obligation;

use Obligation::{Conditional, Mandatory};

pub const FIELD_OBLIGATION: &[(&str, Obligation)] = &[
    ("Resource Title", Mandatory),
    ("Abstract", Mandatory),
    ("Topic Category", Mandatory),
    ("Keywords", Mandatory),
    ("Geographic West Bounding Longitude", Mandatory),
    ("Geographic East Bounding Longitude", Mandatory),
    ("Geographic North Bounding Latitude", Mandatory),
    ("Geographic South Bounding Latitude", Mandatory),
    ("Data Language", Mandatory),
    ("Scale Denominator", Mandatory),
    ("Contact Organisation Name", Mandatory),
    ("Contact Email Address", Mandatory),
    ("Contact Role", Mandatory),
    ("Distribution Online Resource Linkage", Mandatory),
    ("Lineage Statement", Mandatory),
    ("Data Quality Scope Level", Mandatory),
    ("Metadata Language Code", Mandatory),
    ("Metadata Date Stamp", Mandatory),
    ("Metadata Scope Code", Mandatory),
    ("Access Constraints", Mandatory),
    ("Conformance Specification Title", Mandatory),
    ("Conformance Pass", Mandatory),
    ("Publication Date", Conditional),
    ("Reference System Code", Conditional),
    ("Reference System Code Space", Conditional),
    ("Other Constraints", Mandatory),
    ("Use Limitation", Mandatory),
];

/// Obligation level for a field name; unknown names are optional.
pub fn classify(field_name: &str) -> Obligation {
    FIELD_OBLIGATION
        .iter()
        .find(|(name, _)| *name == field_name)
        .map_or(Obligation::Optional, |(_, obligation)| *obligation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fields_classify_from_the_table() {
        assert_eq!(classify("Resource Title"), Obligation::Mandatory);
        assert_eq!(classify("Publication Date"), Obligation::Conditional);
        assert_eq!(classify("Use Limitation"), Obligation::Mandatory);
    }

    #[test]
    fn unknown_fields_default_to_optional() {
        assert_eq!(classify("ArcGIS Format"), Obligation::Optional);
        assert_eq!(classify("Other Keywords (GEMET)"), Obligation::Optional);
        assert_eq!(classify(""), Obligation::Optional);
    }

    #[test]
    fn table_has_no_duplicates() {
        let mut seen = std::collections::BTreeSet::new();
        for (name, _) in FIELD_OBLIGATION {
            assert!(seen.insert(*name), "duplicate obligation entry {name}");
        }
    }
}
