//! Workflow context
//!
//! This module defines the state collected over one conversion run.

use std::path::PathBuf;

use crate::convert::ConverterMode;

/// Kind of converter applied to one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterKind {
    /// The notebook script exporter
    Notebook,
    /// The markdown code extractor
    Markdown,
}

/// A conversion the run would perform, recorded in dry-run mode
#[derive(Debug, Clone)]
pub struct PlannedConversion {
    /// The input file
    pub source: PathBuf,
    /// Which converter would handle it
    pub kind: ConverterKind,
    /// The output path, when it is computable without running any tool.
    /// Known for markdown inputs only; the notebook exporter picks the
    /// extension from the kernel.
    pub predicted_output: Option<PathBuf>,
}

/// Statistics about a conversion run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of convertible files found
    pub files_scanned: usize,
    /// Number of files converted
    pub files_converted: usize,
}

/// Context for a conversion run
#[derive(Debug, Clone)]
pub struct RunContext {
    /// The mode the run operated under
    pub mode: ConverterMode,
    /// Whether the run only planned conversions
    pub dry_run: bool,
    /// Statistics about the run
    pub stats: RunStats,
    /// Planned conversions collected in dry-run mode
    pub planned: Vec<PlannedConversion>,
    /// Completed conversions in source order
    pub converted: Vec<(PathBuf, PathBuf)>,
}

impl RunContext {
    /// Creates a new run context
    pub fn new(mode: ConverterMode, dry_run: bool) -> Self {
        RunContext {
            mode,
            dry_run,
            stats: RunStats::default(),
            planned: Vec::new(),
            converted: Vec::new(),
        }
    }

    /// Records a planned conversion
    pub fn add_planned(&mut self, planned: PlannedConversion) {
        self.stats.files_scanned += 1;
        self.planned.push(planned);
    }

    /// Records a completed conversion
    pub fn add_converted(&mut self, source: PathBuf, output: PathBuf) {
        self.stats.files_scanned += 1;
        self.stats.files_converted += 1;
        self.converted.push((source, output));
    }
}
