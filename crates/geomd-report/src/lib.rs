//! Report assembly: persisted CSV worksheets for both pipelines.
//!
//! The export pipeline produces `metadata_export.csv`,
//! `compliance_summary.csv` and `code_resolution.csv`; the strict
//! checker produces `conformance_detail.csv`, `conformance_summary.csv`
//! and, when files were skipped, `skipped.csv`.

use std::fs::File;
use std::path::{Path, PathBuf};

pub mod codes;
pub mod conformance;
pub mod error;
pub mod export;

pub use codes::write_code_resolution;
pub use conformance::{write_conformance_detail, write_conformance_summary, write_skips};
pub use error::{ReportError, Result};
pub use export::{field_name_universe, write_compliance_summary, write_metadata_export};

/// Creates the report directory for a batch, named after the input
/// folder.
pub fn report_dir(base: &Path, folder_name: &str) -> Result<PathBuf> {
    let dir = base.join(folder_name);
    std::fs::create_dir_all(&dir).map_err(|e| ReportError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}

fn writer(path: &Path) -> Result<csv::Writer<File>> {
    csv::Writer::from_path(path).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writer for worksheets with section headings of varying width.
fn flexible_writer(path: &Path) -> Result<csv::Writer<File>> {
    csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| ReportError::Write {
            path: path.to_path_buf(),
            source: e,
        })
}

fn write_err(path: &Path) -> impl Fn(csv::Error) -> ReportError + '_ {
    move |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    }
}
