//! Worksheets for the strict pipeline: per-check detail matrix, the
//! conformance summary, and the skipped-file list.

use std::collections::BTreeMap;
use std::path::Path;

use geomd_model::{CheckOutcome, ComplianceResult, SkipRecord};
use geomd_validate::CHECKS;
use tracing::debug;

use crate::error::Result;
use crate::writer;

/// Writes the detail matrix: one column per check, one row per file.
/// Row 1 carries check names, row 2 their obligations. Outcomes align
/// with [`CHECKS`] by index.
pub fn write_conformance_detail(
    path: &Path,
    results: &BTreeMap<String, Vec<CheckOutcome>>,
) -> Result<()> {
    let mut out = writer(path)?;
    let err = |e: csv::Error| crate::write_err(path)(e);

    let mut header = vec!["Filename"];
    header.extend(CHECKS.iter().map(|check| check.name));
    out.write_record(&header).map_err(err)?;

    let mut obligations = vec!["(obligation)"];
    obligations.extend(CHECKS.iter().map(|check| check.obligation.as_str()));
    out.write_record(&obligations).map_err(err)?;

    for (filename, outcomes) in results {
        let mut row = vec![filename.as_str()];
        row.extend(outcomes.iter().map(|outcome| outcome.as_str()));
        out.write_record(&row).map_err(err)?;
    }

    out.flush().map_err(|e| crate::write_err(path)(e.into()))?;
    debug!(path = %path.display(), files = results.len(), "wrote conformance detail");
    Ok(())
}

/// Writes the strict summary, including per-obligation present counts.
pub fn write_conformance_summary(
    path: &Path,
    results: &BTreeMap<String, ComplianceResult>,
) -> Result<()> {
    let mut out = writer(path)?;
    let err = |e: csv::Error| crate::write_err(path)(e);

    out.write_record([
        "Filename",
        "ISO 19139 conformant",
        "Missing mandatory fields",
        "Missing count",
        "Present mandatory",
        "Present conditional",
        "Present optional",
    ])
    .map_err(err)?;

    for (filename, result) in results {
        out.write_record([
            filename.as_str(),
            result.conformant_label(),
            &result.missing_mandatory.join(", "),
            &result.missing_count().to_string(),
            &result.present_mandatory.to_string(),
            &result.present_conditional.to_string(),
            &result.present_optional.to_string(),
        ])
        .map_err(err)?;
    }

    out.flush().map_err(|e| crate::write_err(path)(e.into()))?;
    Ok(())
}

/// Writes the skipped-file list. Callers usually skip this worksheet
/// entirely when no file was skipped.
pub fn write_skips(path: &Path, skips: &[SkipRecord]) -> Result<()> {
    let mut out = writer(path)?;
    let err = |e: csv::Error| crate::write_err(path)(e);

    out.write_record(["Filename", "Error"]).map_err(err)?;
    for skip in skips {
        out.write_record([skip.filename.as_str(), skip.reason.as_str()])
            .map_err(err)?;
    }

    out.flush().map_err(|e| crate::write_err(path)(e.into()))?;
    Ok(())
}
