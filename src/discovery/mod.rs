//! File discovery functionality
//!
//! This module contains functions for finding convertible files in a
//! directory and for locating the artifacts external tools leave behind.

mod scanner;

pub use scanner::{is_markdown, is_notebook, locate_artifact, scan_directory};
