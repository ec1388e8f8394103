//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "geomd",
    version,
    about = "Geospatial metadata extraction and ISO 19139 conformance checking",
    long_about = "Extract semantic fields from ISO 19139 / ArcGIS metadata XML and\n\
                  classify each record against INSPIRE obligation levels.\n\n\
                  Handles both the standard gmd/gco-namespaced schema and the\n\
                  flattened ArcGIS vendor export."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract metadata fields from a folder of XML records and assess
    /// compliance from the extracted values.
    Export(ExportArgs),

    /// Run the strict namespace-aware conformance checks against a
    /// folder of XML records.
    Check(CheckArgs),

    /// Print the codelist resolution tables.
    Codelists(CodelistsArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Folder containing .xml metadata files.
    #[arg(value_name = "XML_FOLDER", default_value = "xml")]
    pub xml_folder: PathBuf,

    /// Base directory for report output (default: reports).
    #[arg(long = "output-dir", value_name = "DIR", default_value = "reports")]
    pub output_dir: PathBuf,

    /// Optional coded-value reference CSV; the inlined table is used
    /// when absent.
    #[arg(long = "coded-values", value_name = "PATH")]
    pub coded_values: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Folder containing .xml metadata files.
    #[arg(value_name = "XML_FOLDER", default_value = "xml")]
    pub xml_folder: PathBuf,

    /// Base directory for report output (default: reports).
    #[arg(long = "output-dir", value_name = "DIR", default_value = "reports")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct CodelistsArgs {
    /// Optional coded-value reference CSV; the inlined table is used
    /// when absent.
    #[arg(long = "coded-values", value_name = "PATH")]
    pub coded_values: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
