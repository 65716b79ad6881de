//! Directory scanning functionality
//!
//! This module contains functions for scanning directories for convertible
//! files and for resolving converter output files by filename stem.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;
use once_cell::sync::Lazy;

use crate::constants::{MARKDOWN_GLOB, NOTEBOOK_GLOB};
use crate::convert::ConverterMode;
use crate::errors::{artifact_not_found_error, file_operation_error, Result};
use crate::utils::is_hidden_file;

static NOTEBOOK_PATTERN: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(NOTEBOOK_GLOB).expect("Failed to compile filename pattern for notebooks")
});

static MARKDOWN_PATTERN: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(MARKDOWN_GLOB).expect("Failed to compile filename pattern for markdown files")
});

fn matches_pattern(pattern: &Pattern, path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| pattern.matches(name))
}

/// Checks whether a path names a notebook input
pub fn is_notebook(path: &Path) -> bool {
    matches_pattern(&NOTEBOOK_PATTERN, path)
}

/// Checks whether a path names a markdown-with-embedded-code input
pub fn is_markdown(path: &Path) -> bool {
    matches_pattern(&MARKDOWN_PATTERN, path)
}

/// Scans a directory for convertible files
///
/// Only immediate children are considered; hidden files and subdirectories
/// are skipped. The result is sorted by filename so a batch run visits files
/// in a deterministic order.
///
/// # Arguments
/// * `directory` - The directory to scan
/// * `mode` - Which file types to look for
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The convertible files found, or an error
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_directory(directory: &Path, mode: ConverterMode) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", directory.display());

    let mut files: Vec<PathBuf> = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "scan"))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| !is_hidden_file(path))
        .filter(|path| path.is_file())
        .filter(|path| {
            (mode.includes_notebooks() && is_notebook(path))
                || (mode.includes_markdown() && is_markdown(path))
        })
        .collect();
    files.sort();

    debug!("Found {} convertible files in directory", files.len());

    Ok(files)
}

/// Locates the artifact written next to a converted input
///
/// The script exporter names its output after the input's stem but picks the
/// extension from the notebook's declared kernel, so the produced file has to
/// be found rather than predicted: the input's parent directory is scanned
/// for a file sharing the stem with a different extension. When several
/// siblings qualify, the lexicographically first one wins.
///
/// # Errors
/// Returns an error if the parent directory cannot be read or no matching
/// sibling exists
pub fn locate_artifact(input: &Path) -> Result<PathBuf> {
    let parent = input
        .parent()
        .ok_or_else(|| artifact_not_found_error(input.to_path_buf()))?;

    let mut candidates: Vec<PathBuf> = read_dir(parent)
        .map_err(|e| file_operation_error(e, parent.to_path_buf(), "scan"))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_stem() == input.file_stem() && path.extension() != input.extension()
        })
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| artifact_not_found_error(input.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_notebook_and_is_markdown() {
        assert!(is_notebook(Path::new("/data/sample_python.ipynb")));
        assert!(!is_notebook(Path::new("/data/sample.Rmd")));
        assert!(is_markdown(Path::new("/data/sample.Rmd")));
        assert!(!is_markdown(Path::new("/data/sample.rmd")));
        assert!(!is_markdown(Path::new("/data/notes.md")));
    }

    #[test]
    fn test_locate_artifact_finds_stem_sibling() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sample_python.ipynb");
        fs::write(&input, "{}").unwrap();
        fs::write(dir.path().join("sample_python.py"), "x = 1").unwrap();
        fs::write(dir.path().join("unrelated.py"), "y = 2").unwrap();

        let artifact = locate_artifact(&input).unwrap();
        assert_eq!(artifact, dir.path().join("sample_python.py"));
    }

    #[test]
    fn test_locate_artifact_tie_break_is_lexicographic() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sample.ipynb");
        fs::write(&input, "{}").unwrap();
        fs::write(dir.path().join("sample.py"), "").unwrap();
        fs::write(dir.path().join("sample.jl"), "").unwrap();

        let artifact = locate_artifact(&input).unwrap();
        assert_eq!(
            artifact,
            dir.path().join("sample.jl"),
            "The lexicographically first candidate should win"
        );
    }

    #[test]
    fn test_locate_artifact_missing_sibling() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sample.ipynb");
        fs::write(&input, "{}").unwrap();

        let result = locate_artifact(&input);
        assert!(matches!(
            result,
            Err(crate::errors::Error::ArtifactNotFound { .. })
        ));
    }

    #[test]
    fn test_locate_artifact_ignores_directories() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sample.ipynb");
        fs::write(&input, "{}").unwrap();
        fs::create_dir(dir.path().join("sample")).unwrap();
        fs::write(dir.path().join("sample.py"), "").unwrap();

        let artifact = locate_artifact(&input).unwrap();
        assert_eq!(artifact, dir.path().join("sample.py"));
    }
}
