//! Input discovery: locating the XML documents of a batch.

use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};

/// Lists all XML files in a directory.
///
/// Returns files sorted by filename so batch order (and therefore
/// column ordering derived from the first file) is stable across runs.
/// An existing directory with no XML files is an error: the batch
/// would produce an empty report.
pub fn list_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExtractError::FolderNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| ExtractError::FolderRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| ExtractError::FolderRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_xml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        if is_xml {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(ExtractError::NoDocuments {
            path: dir.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Reads one document into memory for parsing.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ExtractError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_xml_files_sorted_and_case_insensitive() {
        let dir = TempDir::new().unwrap();
        for name in &["b_record.xml", "a_record.XML", "notes.txt"] {
            std::fs::write(dir.path().join(name), "<metadata/>").unwrap();
        }
        let files = list_xml_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a_record.XML", "b_record.xml"]);
    }

    #[test]
    fn missing_folder_is_an_error() {
        let err = list_xml_files(Path::new("/nonexistent/records")).unwrap_err();
        assert!(matches!(err, ExtractError::FolderNotFound { .. }));
    }

    #[test]
    fn empty_folder_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not xml").unwrap();
        let err = list_xml_files(dir.path()).unwrap_err();
        assert!(matches!(err, ExtractError::NoDocuments { .. }));
    }
}
