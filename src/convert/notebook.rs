//! Notebook conversion
//!
//! Converts Jupyter notebooks (`.ipynb`) to their source scripts by invoking
//! the external `jupyter nbconvert` exporter. The output language depends on
//! the kernel declared in the notebook (Python, R, Julia, etc.), so this
//! converter is language-agnostic: the produced file is resolved afterwards
//! by stem matching instead of by predicting its extension.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::config::Settings;
use crate::discovery::locate_artifact;
use crate::errors::{invocation_error, Result};
use crate::utils::{absolute_path, file_stem_str};

/// Converts a notebook file using the default tools
///
/// # Errors
/// See [`convert_notebook_with`]
pub fn convert_notebook(notebook_path: &Path) -> Result<PathBuf> {
    convert_notebook_with(&Settings::default(), notebook_path)
}

/// Converts a notebook file to its source script
///
/// The exporter is asked to write a script named after the input's stem into
/// the input's directory. Input existence is deliberately not checked here;
/// a missing file surfaces as a tool-level failure exactly like any other
/// input the exporter rejects.
///
/// # Arguments
/// * `settings` - Tool settings naming the exporter binary
/// * `notebook_path` - Path to the `.ipynb` notebook file
///
/// # Returns
/// * `Result<PathBuf>` - The path to the converted source script
///
/// # Errors
/// * Returns an invocation error if the exporter cannot be run or exits
///   non-zero
/// * Returns an artifact-not-found error if the exporter succeeded but no
///   output file matching the input's stem exists (a tool or version
///   mismatch)
pub fn convert_notebook_with(settings: &Settings, notebook_path: &Path) -> Result<PathBuf> {
    let notebook_path = absolute_path(notebook_path)?;
    let stem = file_stem_str(&notebook_path)?.to_string();

    debug!("Exporting {} to a script", notebook_path.display());

    let output = Command::new(&settings.jupyter)
        .args(["nbconvert", "--to", "script"])
        .arg(&notebook_path)
        .arg("--output")
        .arg(&stem)
        .stdout(Stdio::null())
        .output()
        .map_err(|e| invocation_error(&settings.jupyter, None, &e.to_string()))?;

    if !output.status.success() {
        warn!(
            "{} nbconvert failed for {}",
            settings.jupyter,
            notebook_path.display()
        );
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(invocation_error(
            &settings.jupyter,
            output.status.code(),
            stderr.trim(),
        ));
    }

    locate_artifact(&notebook_path)
}
