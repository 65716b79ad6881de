//! Conversion functionality
//!
//! This module contains the single-file converters and the directory batch
//! converter built on top of them. The converters do no parsing themselves;
//! each one invokes an external tool and resolves the file it produced.

mod markdown;
mod notebook;
mod probe;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

use crate::config::Settings;
use crate::discovery::{is_markdown, is_notebook, scan_directory};
use crate::errors::{generic_error, not_a_directory_error, Result};
use crate::utils::absolute_path;

pub use markdown::{convert_markdown, convert_markdown_with, escape_r_string, markdown_output_path};
pub use notebook::{convert_notebook, convert_notebook_with};
pub use probe::{jupyter_available, r_available};

/// Mapping from original file paths to converted script paths
pub type BatchResult = HashMap<PathBuf, PathBuf>;

/// Selector for which file types a directory batch run converts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConverterMode {
    /// Convert notebook files only
    Notebook,
    /// Convert markdown files only
    Markdown,
    /// Convert all supported file types
    #[default]
    Both,
}

impl ConverterMode {
    /// Whether this mode processes notebook inputs
    pub fn includes_notebooks(&self) -> bool {
        matches!(self, ConverterMode::Notebook | ConverterMode::Both)
    }

    /// Whether this mode processes markdown inputs
    pub fn includes_markdown(&self) -> bool {
        matches!(self, ConverterMode::Markdown | ConverterMode::Both)
    }
}

impl FromStr for ConverterMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notebook" | "ipynb" => Ok(ConverterMode::Notebook),
            "markdown" | "rmd" => Ok(ConverterMode::Markdown),
            "both" => Ok(ConverterMode::Both),
            _ => Err(format!("Unknown converter mode: {s}")),
        }
    }
}

/// Converts all supported files in a directory using the default tools
///
/// # Errors
/// Returns an error if the directory cannot be scanned or any single
/// conversion fails
pub fn convert_directory(directory: &Path, mode: ConverterMode) -> Result<BatchResult> {
    convert_directory_with(&Settings::default(), directory, mode)
}

/// Converts all supported files in a directory
///
/// Only immediate children are considered. Conversion is sequential in
/// sorted filename order and fail-fast: the first failure aborts the batch
/// and is returned unmodified. A directory with nothing to convert yields an
/// empty mapping.
///
/// # Arguments
/// * `settings` - Tool settings for the external converters
/// * `directory` - The directory containing the input files
/// * `mode` - Which file types to convert
///
/// # Returns
/// * `Result<BatchResult>` - Mapping from original paths to converted paths
///
/// # Errors
/// * Returns a not-a-directory error if the path is not an existing directory
/// * Propagates the first single-file conversion failure
pub fn convert_directory_with(
    settings: &Settings,
    directory: &Path,
    mode: ConverterMode,
) -> Result<BatchResult> {
    let directory = absolute_path(directory)?;
    if !directory.is_dir() {
        return Err(not_a_directory_error(directory));
    }

    let mut results = BatchResult::new();
    for file in scan_directory(&directory, mode)? {
        let converted = convert_file_with(settings, &file)?;
        results.insert(file, converted);
    }

    info!(
        "Converted {} files in {}",
        results.len(),
        directory.display()
    );

    Ok(results)
}

/// Converts a single file by dispatching on its filename
///
/// # Errors
/// Returns an error if the file is not a supported input type or the
/// conversion fails
pub fn convert_file_with(settings: &Settings, file: &Path) -> Result<PathBuf> {
    if is_notebook(file) {
        convert_notebook_with(settings, file)
    } else if is_markdown(file) {
        convert_markdown_with(settings, file)
    } else {
        Err(generic_error(&format!(
            "Unsupported input file: {}",
            file.display()
        )))
    }
}
