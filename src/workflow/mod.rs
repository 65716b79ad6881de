//! Workflow orchestration
//!
//! This module contains the application-level run flow built on top of the
//! converter library: settings loading, target resolution, dry-run planning,
//! and reporting.

mod context;
mod engine;

pub use context::{ConverterKind, PlannedConversion, RunContext, RunStats};
pub use engine::{run, RunOptions};
