//! Export worksheets for the loose pipeline: the field matrix and the
//! compliance summary.

use std::collections::BTreeMap;
use std::path::Path;

use geomd_model::{ComplianceResult, ExtractedFields};
use geomd_validate::classify;
use tracing::debug;

use crate::error::Result;
use crate::writer;

/// Writes the metadata export matrix.
///
/// Row 1 is the header (Filename plus the batch's field-name universe),
/// row 2 carries the obligation of each column, and each following row
/// is one document in filename order. Cells for fields a document does
/// not carry are left empty.
pub fn write_metadata_export(
    path: &Path,
    field_names: &[String],
    files: &BTreeMap<String, ExtractedFields>,
) -> Result<()> {
    let mut out = writer(path)?;

    let mut header = vec!["Filename".to_string()];
    header.extend(field_names.iter().cloned());
    out.write_record(&header).map_err(crate::write_err(path))?;

    let mut obligations = vec![String::new()];
    obligations.extend(field_names.iter().map(|name| classify(name).to_string()));
    out.write_record(&obligations).map_err(crate::write_err(path))?;

    for (filename, fields) in files {
        let mut row = vec![filename.clone()];
        row.extend(
            field_names
                .iter()
                .map(|name| fields.get(name).unwrap_or_default().to_string()),
        );
        out.write_record(&row).map_err(crate::write_err(path))?;
    }

    out.flush().map_err(|e| crate::write_err(path)(e.into()))?;
    debug!(path = %path.display(), files = files.len(), columns = field_names.len(), "wrote metadata export");
    Ok(())
}

/// Writes the loose compliance summary: one row per document with the
/// verdict and its missing mandatory fields.
pub fn write_compliance_summary(
    path: &Path,
    results: &BTreeMap<String, ComplianceResult>,
) -> Result<()> {
    let mut out = writer(path)?;
    out.write_record([
        "Filename",
        "ISO 19139 compliant",
        "Missing mandatory fields",
        "Missing count",
    ])
    .map_err(crate::write_err(path))?;

    for (filename, result) in results {
        out.write_record([
            filename.as_str(),
            result.conformant_label(),
            &result.missing_mandatory.join(", "),
            &result.missing_count().to_string(),
        ])
        .map_err(crate::write_err(path))?;
    }

    out.flush().map_err(|e| crate::write_err(path)(e.into()))?;
    Ok(())
}

/// Union of field names across the batch, sorted for a stable column
/// order.
pub fn field_name_universe(files: &BTreeMap<String, ExtractedFields>) -> Vec<String> {
    let mut names: Vec<String> = files
        .values()
        .flat_map(|fields| fields.names().map(ToString::to_string))
        .collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> BTreeMap<String, ExtractedFields> {
        let mut a = ExtractedFields::new();
        a.add("Resource Title", "Soils of England");
        a.add("Keywords", "Soil, Land use");
        let mut b = ExtractedFields::new();
        b.add("Resource Title", "Rivers of Wales");
        b.add("Abstract", "A river map.");
        BTreeMap::from([("a.xml".to_string(), a), ("b.xml".to_string(), b)])
    }

    #[test]
    fn universe_is_sorted_union() {
        let names = field_name_universe(&sample_batch());
        assert_eq!(names, vec!["Abstract", "Keywords", "Resource Title"]);
    }

    #[test]
    fn export_matrix_has_obligation_row_and_file_rows() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("metadata_export.csv");
        let files = sample_batch();
        let names = field_name_universe(&files);
        write_metadata_export(&path, &names, &files).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "Filename");
        assert_eq!(&rows[0][3], "Resource Title");
        // obligation row: blank under Filename, then per-column levels
        assert_eq!(&rows[1][0], "");
        assert_eq!(&rows[1][1], "mandatory"); // Abstract
        assert_eq!(&rows[1][2], "mandatory"); // Keywords
        // a.xml has no Abstract
        assert_eq!(&rows[2][0], "a.xml");
        assert_eq!(&rows[2][1], "");
        assert_eq!(&rows[2][2], "Soil, Land use");
        assert_eq!(&rows[3][3], "Rivers of Wales");
    }

    #[test]
    fn compliance_summary_lists_missing_fields() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("compliance_summary.csv");
        let results = BTreeMap::from([(
            "a.xml".to_string(),
            ComplianceResult {
                conformant: false,
                missing_mandatory: vec!["Abstract".to_string(), "Keywords".to_string()],
                present_mandatory: 1,
                ..ComplianceResult::default()
            },
        )]);
        write_compliance_summary(&path, &results).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "a.xml");
        assert_eq!(&row[1], "No");
        assert_eq!(&row[2], "Abstract, Keywords");
        assert_eq!(&row[3], "2");
    }
}
