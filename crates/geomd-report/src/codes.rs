//! The code-resolution worksheet: which export fields are resolved
//! through a codelist, and the full number-to-label table in use.

use std::path::Path;

use geomd_codelists::FIELD_TO_CODELIST;
use geomd_model::CodelistRegistry;

use crate::error::Result;
use crate::flexible_writer;

const FIELDS_HEADING: &str = "Fields using code resolution - where code numbers are replaced in the report with full text for ease of reading";
const RESOLUTION_HEADING: &str = "How codes are resolved to text";
const RESOLUTION_NOTE: &str = "Numeric codes (e.g. 005 in XML) and code names (e.g. license) are mapped to the labels below. ArcGIS often uses 3-digit numeric values.";

/// Writes the two-section worksheet: the field-to-codelist mapping,
/// then the registry's full resolution table.
pub fn write_code_resolution(path: &Path, registry: &CodelistRegistry) -> Result<()> {
    let mut out = flexible_writer(path)?;
    let err = |e: csv::Error| crate::write_err(path)(e);

    out.write_record([FIELDS_HEADING]).map_err(err)?;
    out.write_record(["Export field name", "Codelist"]).map_err(err)?;
    for (field_name, codelist_name) in FIELD_TO_CODELIST {
        out.write_record([*field_name, *codelist_name]).map_err(err)?;
    }

    out.write_record([""]).map_err(err)?;
    out.write_record([RESOLUTION_HEADING]).map_err(err)?;
    out.write_record([RESOLUTION_NOTE]).map_err(err)?;
    out.write_record(["Codelist", "Code (numeric or name)", "Resolved label"])
        .map_err(err)?;
    for (codelist_name, code, label) in registry.resolution_table() {
        out.write_record([codelist_name, code, label]).map_err(err)?;
    }

    out.flush().map_err(|e| crate::write_err(path)(e.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomd_codelists::build_registry;

    #[test]
    fn worksheet_contains_both_sections() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("code_resolution.csv");
        write_code_resolution(&path, &build_registry(None)).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(&rows[1][0], "Export field name");
        assert!(rows.iter().any(|r| r.len() == 2 && &r[0] == "Access Constraints"));
        assert!(rows.iter().any(|r| {
            r.len() == 3 && &r[0] == "MD_RestrictionCode" && &r[1] == "5" && &r[2] == "Licence"
        }));
    }
}
