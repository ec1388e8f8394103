use std::collections::BTreeMap;
use std::path::PathBuf;

use geomd_model::{ComplianceResult, SkipRecord};

/// Outcome of one batch run, shared by the export and check commands.
#[derive(Debug)]
pub struct BatchResult {
    pub folder_name: String,
    pub output_dir: PathBuf,
    pub results: BTreeMap<String, ComplianceResult>,
    pub skipped: Vec<SkipRecord>,
}

impl BatchResult {
    pub fn processed(&self) -> usize {
        self.results.len()
    }

    pub fn conformant(&self) -> usize {
        self.results.values().filter(|r| r.conformant).count()
    }
}
