//! Workflow engine
//!
//! This module contains the engine that orchestrates a conversion run.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::config::{load_settings, read_or_create, Settings};
use crate::convert::{
    convert_directory_with, convert_file_with, markdown_output_path, ConverterMode,
};
use crate::discovery::{is_markdown, is_notebook, scan_directory};
use crate::errors::{generic_error, not_a_directory_error};
use crate::logging::format_message;
use crate::utils::absolute_path;

use super::context::{ConverterKind, PlannedConversion, RunContext};

/// Options for a conversion run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// File or directory to convert
    pub target: PathBuf,
    /// Batch mode override from the command line
    pub mode: Option<ConverterMode>,
    /// Whether to only report what would be converted
    pub dry_run: bool,
    /// Path to the configuration file
    pub config_path: PathBuf,
}

/// Runs a conversion based on the options
///
/// This function orchestrates the run:
/// 1. Read the configuration and resolve the effective mode
/// 2. Resolve the target; a file is dispatched to its converter, a directory
///    goes through the batch converter
/// 3. In dry-run mode, plan conversions instead of invoking any tool
/// 4. Report the outcome
///
/// # Arguments
/// * `options` - Options for the run
///
/// # Returns
/// * `Result<RunContext>` - The run context with statistics, or an error
///
/// # Errors
/// * Returns an error if any step fails; a batch aborts on the first
///   conversion failure
pub fn run(options: RunOptions) -> Result<RunContext> {
    // Step 1: Read the configuration
    let config_file_path = read_or_create(options.config_path)?;
    let settings = load_settings(config_file_path)?;

    let mode = options.mode.unwrap_or(settings.mode);
    let mut context = RunContext::new(mode, options.dry_run);

    // Step 2: Resolve the target. A name matching an input pattern is
    // dispatched as a single file even when it does not exist, so a missing
    // input still surfaces as a tool-level failure instead of a local check.
    let target = absolute_path(&options.target)?;

    if target.is_file() || is_notebook(&target) || is_markdown(&target) {
        process_single_file(&settings, &target, &mut context)?;
    } else {
        process_directory(&settings, &target, mode, &mut context)?;
    }

    report(&context);

    Ok(context)
}

/// Converts (or plans) a single explicitly named file
fn process_single_file(
    settings: &Settings,
    file: &Path,
    context: &mut RunContext,
) -> Result<()> {
    if context.dry_run {
        let planned = plan_for(file)?;
        context.add_planned(planned);
        return Ok(());
    }

    let output = convert_file_with(settings, file)?;
    info!("Converted {} -> {}", file.display(), output.display());
    context.add_converted(file.to_path_buf(), output);

    Ok(())
}

/// Converts (or plans) every matching file in a directory
fn process_directory(
    settings: &Settings,
    directory: &Path,
    mode: ConverterMode,
    context: &mut RunContext,
) -> Result<()> {
    if context.dry_run {
        // The not-a-directory check still applies before any planning
        if !directory.is_dir() {
            return Err(not_a_directory_error(directory.to_path_buf()).into());
        }
        for file in scan_directory(directory, mode)? {
            let planned = plan_for(&file)?;
            context.add_planned(planned);
        }
        return Ok(());
    }

    let results = convert_directory_with(settings, directory, mode)?;

    // Report in source order; the batch mapping itself is unordered
    let mut converted: Vec<(PathBuf, PathBuf)> = results.into_iter().collect();
    converted.sort();
    for (source, output) in converted {
        info!("Converted {} -> {}", source.display(), output.display());
        context.add_converted(source, output);
    }

    Ok(())
}

/// Builds the planned conversion record for one input
fn plan_for(file: &Path) -> Result<PlannedConversion> {
    if is_notebook(file) {
        Ok(PlannedConversion {
            source: file.to_path_buf(),
            kind: ConverterKind::Notebook,
            predicted_output: None,
        })
    } else if is_markdown(file) {
        Ok(PlannedConversion {
            source: file.to_path_buf(),
            kind: ConverterKind::Markdown,
            predicted_output: Some(markdown_output_path(file)?),
        })
    } else {
        Err(generic_error(&format!("Unsupported input file: {}", file.display())).into())
    }
}

/// Prints the human-readable outcome of a run
fn report(context: &RunContext) {
    if context.dry_run {
        if context.planned.is_empty() {
            println!("Nothing to convert.");
            return;
        }

        println!("\nPlanned conversions:");
        println!("====================");
        for plan in &context.planned {
            let converter = match plan.kind {
                ConverterKind::Notebook => "notebook exporter",
                ConverterKind::Markdown => "code extractor",
            };
            println!("From: {}", plan.source.display());
            match &plan.predicted_output {
                Some(output) => println!("  To:   {} ({})", output.display(), converter),
                None => println!("  To:   named by the notebook's kernel ({converter})"),
            }
        }
        println!("\nTotal: {} files", context.stats.files_scanned);
        println!("\nRun without --dry to execute these conversions.");
        return;
    }

    if context.converted.is_empty() {
        println!("Nothing to convert.");
        return;
    }

    println!("\nConverted files:");
    println!("----------------");
    for (source, output) in &context.converted {
        let output_str = output.display().to_string();
        let message = format!("{} -> {}", source.display(), output_str);
        let colored_message = format!("{} -> {}", source.display(), output_str.as_str().green());
        println!("{}", format_message(&message, &colored_message));
    }
    println!("\nTotal: {} files", context.stats.files_converted);
}
