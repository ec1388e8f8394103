use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use geomd_codelists::{FIELD_TO_CODELIST, build_registry};
use geomd_report::{
    field_name_universe, report_dir, write_code_resolution, write_compliance_summary,
    write_conformance_detail, write_conformance_summary, write_metadata_export, write_skips,
};
use geomd_validate::{loose, summarise};

use crate::cli::{CheckArgs, CodelistsArgs, ExportArgs};
use crate::pipeline::{check_batch, extract_batch, folder_name};
use crate::summary::apply_table_style;
use crate::types::BatchResult;

pub fn run_export(args: &ExportArgs) -> Result<BatchResult> {
    let folder = folder_name(&args.xml_folder);
    let span = info_span!("export", folder = %args.xml_folder.display());
    let _guard = span.enter();
    let start = Instant::now();

    let registry = build_registry(args.coded_values.as_deref());
    let batch = extract_batch(&args.xml_folder, &registry)?;

    // Mandatory columns are judged against the batch union, so a field
    // no document carries never counts as missing.
    let field_names = field_name_universe(&batch.files);
    let mut results = BTreeMap::new();
    for (filename, fields) in &batch.files {
        results.insert(filename.clone(), loose::evaluate(fields, &field_names));
    }

    let dir = report_dir(&args.output_dir, &folder).context("create report directory")?;
    write_metadata_export(&dir.join("metadata_export.csv"), &field_names, &batch.files)?;
    write_compliance_summary(&dir.join("compliance_summary.csv"), &results)?;
    write_code_resolution(&dir.join("code_resolution.csv"), &registry)?;
    if !batch.skipped.is_empty() {
        write_skips(&dir.join("skipped.csv"), &batch.skipped)?;
    }

    info!(
        files = results.len(),
        columns = field_names.len(),
        skipped = batch.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );
    Ok(BatchResult {
        folder_name: folder,
        output_dir: dir,
        results,
        skipped: batch.skipped,
    })
}

pub fn run_check(args: &CheckArgs) -> Result<BatchResult> {
    let folder = folder_name(&args.xml_folder);
    let span = info_span!("check", folder = %args.xml_folder.display());
    let _guard = span.enter();
    let start = Instant::now();

    let batch = check_batch(&args.xml_folder)?;
    let mut results = BTreeMap::new();
    for (filename, outcomes) in &batch.outcomes {
        results.insert(filename.clone(), summarise(outcomes));
    }

    let dir = report_dir(&args.output_dir, &folder).context("create report directory")?;
    write_conformance_detail(&dir.join("conformance_detail.csv"), &batch.outcomes)?;
    write_conformance_summary(&dir.join("conformance_summary.csv"), &results)?;
    if !batch.skipped.is_empty() {
        write_skips(&dir.join("skipped.csv"), &batch.skipped)?;
    }

    info!(
        files = results.len(),
        skipped = batch.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "conformance check complete"
    );
    Ok(BatchResult {
        folder_name: folder,
        output_dir: dir,
        results,
        skipped: batch.skipped,
    })
}

pub fn run_codelists(args: &CodelistsArgs) -> Result<()> {
    let registry = build_registry(args.coded_values.as_deref());

    let mut fields = Table::new();
    fields.set_header(vec!["Export field", "Codelist"]);
    apply_table_style(&mut fields);
    for (field, codelist) in FIELD_TO_CODELIST {
        fields.add_row(vec![*field, *codelist]);
    }
    println!("{fields}");

    println!();
    let mut codes = Table::new();
    codes.set_header(vec!["Codelist", "Code", "Label"]);
    apply_table_style(&mut codes);
    for (codelist, num, label) in registry.resolution_table() {
        codes.add_row(vec![codelist, num, label]);
    }
    println!("{codes}");
    Ok(())
}
