//! Optional coded-value reference resource loader.
//!
//! The reference file is a CSV rendering of the vendor's coded-value
//! workbook: column 1 names the codelist (carried forward over blank
//! cells), column 2 the standard code name, column 3 the vendor numeric
//! code. Header and preamble rows carry no numeric code and are skipped.
//! Absence of the file is not an error; the caller falls back to the
//! inlined table.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// Codelist key renames used by the external resource for a subset of
/// lists.
const RESOURCE_CODELIST_RENAMES: &[(&str, &str)] = &[("MD_CharSetCd", "MD_CharacterSetCode")];

/// Owned (codelist, numeric code, standard code name) row.
pub type OwnedCodedValueRow = (String, String, String);

/// Load coded-value rows from a reference CSV.
///
/// Returns only rows with an all-digit numeric code; everything else in
/// the file (headers, preamble, section titles) is ignored.
pub fn load_coded_values(path: &Path) -> Result<Vec<OwnedCodedValueRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read coded values: {}", path.display()))?;

    let mut rows = Vec::new();
    let mut current: Option<String> = None;
    for record in reader.records() {
        let record =
            record.with_context(|| format!("read coded values record: {}", path.display()))?;
        let list_cell = record.get(0).unwrap_or("").trim();
        if !list_cell.is_empty() {
            current = Some(rename_codelist(list_cell).to_string());
        }
        let std_code = record.get(1).unwrap_or("").trim();
        let num_code = record.get(2).unwrap_or("").trim();
        if std_code.is_empty() || num_code.is_empty() {
            continue;
        }
        if !num_code.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let Some(codelist) = current.clone() else {
            continue;
        };
        rows.push((codelist, num_code.to_string(), std_code.to_string()));
    }
    Ok(rows)
}

fn rename_codelist(name: &str) -> &str {
    RESOURCE_CODELIST_RENAMES
        .iter()
        .find(|(from, _)| *from == name)
        .map_or(name, |(_, to)| *to)
}
