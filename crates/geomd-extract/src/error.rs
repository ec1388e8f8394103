//! Extraction error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("input folder not found: {path}")]
    FolderNotFound { path: PathBuf },

    #[error("failed to read input folder {path}: {source}")]
    FolderRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no XML files found in {path}")]
    NoDocuments { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed XML in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: roxmltree::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
