//! Codelist registry construction.
//!
//! The number table for each codelist is derived from the coded-value
//! reference rows (external CSV when available, inlined table otherwise)
//! by resolving each standard code name through the codelist's name
//! table, falling back to the generic label formatter. The registry is
//! built once before the batch and shared read-only.

use std::path::Path;

use geomd_model::{Codelist, CodelistRegistry, normalise_code};
use tracing::{debug, warn};

use crate::coded_values::CODED_VALUES;
use crate::labels::{self, NameTable, format_code_label};
use crate::loader::{OwnedCodedValueRow, load_coded_values};

/// Build the full registry.
///
/// When `resource` points at a readable coded-value reference CSV its
/// rows are used; otherwise the inlined table is. Either way the
/// resulting number tables are identical for an unmodified resource.
pub fn build_registry(resource: Option<&Path>) -> CodelistRegistry {
    let rows = resource.and_then(|path| {
        if !path.is_file() {
            debug!(path = %path.display(), "coded value reference not present, using inlined table");
            return None;
        }
        match load_coded_values(path) {
            Ok(rows) if !rows.is_empty() => {
                debug!(path = %path.display(), rows = rows.len(), "loaded coded value reference");
                Some(rows)
            }
            Ok(_) => {
                warn!(path = %path.display(), "coded value reference contained no rows, using inlined table");
                None
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to read coded value reference, using inlined table");
                None
            }
        }
    });

    match rows {
        Some(rows) => build_from_rows(&rows),
        None => build_from_rows(&inlined_rows()),
    }
}

/// The inlined reference rows as owned values.
fn inlined_rows() -> Vec<OwnedCodedValueRow> {
    CODED_VALUES
        .iter()
        .map(|(list, num, std)| (list.to_string(), num.to_string(), std.to_string()))
        .collect()
}

fn build_from_rows(rows: &[OwnedCodedValueRow]) -> CodelistRegistry {
    let mut registry = CodelistRegistry::new();
    for (name, table) in labels::REFERENCE_CODELISTS {
        registry.add(build_codelist(name, table, rows));
    }
    registry.add(content_type_codelist());
    registry
}

fn build_codelist(name: &str, table: NameTable, rows: &[OwnedCodedValueRow]) -> Codelist {
    let mut codelist = Codelist::new(name);
    for (key, label) in table {
        codelist
            .by_name
            .insert((*key).to_string(), (*label).to_string());
    }
    for (list, num_code, std_code) in rows {
        if list != name {
            continue;
        }
        let Ok(num) = num_code.parse::<u32>() else {
            continue;
        };
        let key = normalise_code(std_code);
        let label = match codelist.by_name.get(&key) {
            Some(label) if !key.is_empty() => label.clone(),
            _ => format_code_label(std_code),
        };
        codelist.by_num.insert(num, label);
    }
    codelist
}

/// ArcGIS_ContentTypeCode has no row in the reference workbook; numeric
/// codes are 1-based positions in the label table.
fn content_type_codelist() -> Codelist {
    let mut codelist = Codelist::new("ArcGIS_ContentTypeCode");
    for (index, (key, label)) in labels::CONTENT_TYPE.iter().enumerate() {
        codelist
            .by_name
            .insert((*key).to_string(), (*label).to_string());
        codelist.by_num.insert(index as u32 + 1, (*label).to_string());
    }
    codelist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_all_codelists() {
        let registry = build_registry(None);
        for name in [
            "CI_PresentationFormCode",
            "CI_RoleCode",
            "MD_CharacterSetCode",
            "MD_GeometricObjectTypeCode",
            "MD_MaintenanceFrequencyCode",
            "MD_ProgressCode",
            "MD_RestrictionCode",
            "MD_ScopeCode",
            "MD_SpatialRepresentationTypeCode",
            "MD_TopicCategoryCode",
            "MD_TopologyLevelCode",
            "ArcGIS_ContentTypeCode",
        ] {
            assert!(registry.get(name).is_some(), "missing codelist {name}");
        }
    }

    #[test]
    fn numeric_labels_prefer_name_table() {
        let registry = build_registry(None);
        // 005 -> license -> UK spelling comes from the name table
        assert_eq!(registry.resolve("005", "MD_RestrictionCode"), "Licence");
        assert_eq!(registry.resolve("004", "MD_ProgressCode"), "On-going");
        assert_eq!(registry.resolve("006", "MD_CharacterSetCode"), "ISO 8859-1");
    }

    #[test]
    fn numeric_labels_fall_back_to_formatter() {
        let registry = build_registry(None);
        // 017 is the reserved character-set slot
        assert_eq!(registry.resolve("017", "MD_CharacterSetCode"), "Reserved");
        // slash-qualified code has no name-table entry, so the formatter
        // title-cases the final segment
        assert_eq!(
            registry.resolve("015", "MD_RestrictionCode"),
            "Sensitive But Unclassified"
        );
    }

    #[test]
    fn content_type_numeric_codes() {
        let registry = build_registry(None);
        assert_eq!(
            registry.resolve("1", "ArcGIS_ContentTypeCode"),
            "Live Data and Maps"
        );
        assert_eq!(
            registry.resolve("downloadableData", "ArcGIS_ContentTypeCode"),
            "Downloadable Data"
        );
    }
}
