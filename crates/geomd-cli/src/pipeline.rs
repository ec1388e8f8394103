//! Batch stages: walk a folder of XML records and run each document
//! through extraction or the strict checks.
//!
//! A document that cannot be read, parsed, or qualified never aborts
//! the batch. It is recorded as a skip and the remaining files are
//! still processed.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use geomd_extract::discovery::{list_xml_files, read_document};
use geomd_extract::{ExtractError, extract};
use geomd_model::{CheckOutcome, CodelistRegistry, ExtractedFields, SkipRecord};
use geomd_validate::{SKIP_REASON, check_document};
use tracing::{debug, warn};

/// Per-file extraction results for the export pipeline.
pub struct ExportBatch {
    pub files: BTreeMap<String, ExtractedFields>,
    pub skipped: Vec<SkipRecord>,
}

/// Per-file check outcomes for the strict pipeline.
pub struct CheckBatch {
    pub outcomes: BTreeMap<String, Vec<CheckOutcome>>,
    pub skipped: Vec<SkipRecord>,
}

/// Extracts fields from every XML file in `folder`.
pub fn extract_batch(folder: &Path, registry: &CodelistRegistry) -> Result<ExportBatch> {
    let mut files = BTreeMap::new();
    let mut skipped = Vec::new();

    for path in list_xml_files(folder)? {
        let filename = display_name(&path);
        let Some(text) = read_or_skip(&path, &filename, &mut skipped) else {
            continue;
        };
        let Some(doc) = parse_or_skip(&text, &path, &filename, &mut skipped) else {
            continue;
        };
        let fields = extract(&doc, registry);
        debug!(file = %filename, fields = fields.len(), "extracted fields");
        files.insert(filename, fields);
    }

    Ok(ExportBatch { files, skipped })
}

/// Runs the strict conformance checks over every XML file in `folder`.
pub fn check_batch(folder: &Path) -> Result<CheckBatch> {
    let mut outcomes = BTreeMap::new();
    let mut skipped = Vec::new();

    for path in list_xml_files(folder)? {
        let filename = display_name(&path);
        let Some(text) = read_or_skip(&path, &filename, &mut skipped) else {
            continue;
        };
        let Some(doc) = parse_or_skip(&text, &path, &filename, &mut skipped) else {
            continue;
        };
        match check_document(&doc) {
            Some(results) => {
                debug!(file = %filename, "checked document");
                outcomes.insert(filename, results);
            }
            None => {
                warn!(file = %filename, "skipping document without a gmd:MD_Metadata root");
                skipped.push(SkipRecord {
                    filename,
                    reason: SKIP_REASON.to_string(),
                });
            }
        }
    }

    Ok(CheckBatch { outcomes, skipped })
}

/// Report-directory name derived from the input folder.
pub fn folder_name(folder: &Path) -> String {
    folder
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("batch")
        .to_string()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown")
        .to_string()
}

fn read_or_skip(path: &Path, filename: &str, skipped: &mut Vec<SkipRecord>) -> Option<String> {
    match read_document(path) {
        Ok(text) => Some(text),
        Err(error) => {
            warn!(file = %filename, %error, "skipping unreadable file");
            skipped.push(SkipRecord {
                filename: filename.to_string(),
                reason: error.to_string(),
            });
            None
        }
    }
}

fn parse_or_skip<'input>(
    text: &'input str,
    path: &Path,
    filename: &str,
    skipped: &mut Vec<SkipRecord>,
) -> Option<roxmltree::Document<'input>> {
    match roxmltree::Document::parse(text) {
        Ok(doc) => Some(doc),
        Err(source) => {
            let error = ExtractError::Parse {
                path: path.to_path_buf(),
                source,
            };
            warn!(file = %filename, %error, "skipping file that does not parse as XML");
            skipped.push(SkipRecord {
                filename: filename.to_string(),
                reason: error.to_string(),
            });
            None
        }
    }
}
