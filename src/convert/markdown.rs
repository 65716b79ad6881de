//! Markdown conversion
//!
//! Extracts code chunks from R Markdown (`.Rmd`) files by running
//! `knitr::purl` through the external R interpreter with documentation
//! stripped. Requires R and the knitr package to be installed.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::config::Settings;
use crate::constants::SCRIPT_EXTENSION;
use crate::errors::{invocation_error, Result};
use crate::utils::{absolute_path, path_to_str};

/// Escape a string for embedding in an R string literal
///
/// Backslashes and double quotes would otherwise corrupt the generated
/// command, or let a crafted path smuggle R code into it.
pub fn escape_r_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Computes the output path for a markdown input
///
/// The mapping is deterministic: the absolute input path with its extension
/// replaced by the script extension. No tool is consulted.
///
/// # Errors
/// Returns an error if the input path cannot be resolved
pub fn markdown_output_path(markdown_path: &Path) -> Result<PathBuf> {
    let markdown_path = absolute_path(markdown_path)?;
    Ok(markdown_path.with_extension(SCRIPT_EXTENSION))
}

/// Converts a markdown file using the default tools
///
/// # Errors
/// See [`convert_markdown_with`]
pub fn convert_markdown(markdown_path: &Path) -> Result<PathBuf> {
    convert_markdown_with(&Settings::default(), markdown_path)
}

/// Converts an R Markdown file to an R script
///
/// # Arguments
/// * `settings` - Tool settings naming the interpreter binary
/// * `markdown_path` - Path to the `.Rmd` file
///
/// # Returns
/// * `Result<PathBuf>` - The path to the extracted `.r` script
///
/// # Errors
/// * Returns an invocation error if the interpreter cannot be run or exits
///   non-zero (interpreter missing, knitr missing, malformed input)
/// * Returns an invalid-path error if a path cannot be embedded in the
///   extraction command
pub fn convert_markdown_with(settings: &Settings, markdown_path: &Path) -> Result<PathBuf> {
    let markdown_path = absolute_path(markdown_path)?;
    let output_path = markdown_path.with_extension(SCRIPT_EXTENSION);

    let command = extraction_command(&markdown_path, &output_path)?;

    debug!("Extracting code chunks from {}", markdown_path.display());

    let output = Command::new(&settings.r)
        .arg("-e")
        .arg(&command)
        .stdout(Stdio::null())
        .output()
        .map_err(|e| invocation_error(&settings.r, None, &e.to_string()))?;

    if !output.status.success() {
        warn!(
            "{} failed to extract code from {}",
            settings.r,
            markdown_path.display()
        );
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(invocation_error(
            &settings.r,
            output.status.code(),
            stderr.trim(),
        ));
    }

    // The output path is deterministic and the tool is trusted to have
    // written it, so there is no existence re-check.
    Ok(output_path)
}

/// Renders the knitr extraction command for one input/output pair
///
/// The interpreter receives the command through an argument vector, so the
/// escaping only has to keep the R string literals intact.
fn extraction_command(input: &Path, output: &Path) -> Result<String> {
    let input = escape_r_string(path_to_str(input)?);
    let output = escape_r_string(path_to_str(output)?);
    Ok(format!(
        r#"knitr::purl(input = "{input}", output = "{output}", documentation = 0)"#
    ))
}
