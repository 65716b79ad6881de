//! Configuration data model
//!
//! This module defines the settings structure for the application.

use serde::Deserialize;

use crate::constants::{JUPYTER_DEFAULT, R_DEFAULT};
use crate::convert::ConverterMode;
use crate::errors::{generic_error, Result};

/// Application settings
///
/// Settings cover the external tool binaries and the default batch mode.
/// Every field is optional in the file; absent fields fall back to the
/// defaults, and an absent file means all defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Binary invoked as the notebook script exporter
    pub jupyter: String,
    /// Binary invoked as the code-extraction interpreter
    pub r: String,
    /// Default mode for directory runs
    pub mode: ConverterMode,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            jupyter: JUPYTER_DEFAULT.to_string(),
            r: R_DEFAULT.to_string(),
            mode: ConverterMode::Both,
        }
    }
}

impl Settings {
    /// Validates the settings
    ///
    /// Tool binaries are located through the execution path at invocation
    /// time, so validation only rejects values that could never work.
    ///
    /// # Errors
    /// Returns an error if a tool binary name is empty
    pub fn validate(&self) -> Result<()> {
        if self.jupyter.trim().is_empty() {
            return Err(generic_error("The jupyter tool binary must not be empty"));
        }
        if self.r.trim().is_empty() {
            return Err(generic_error("The r tool binary must not be empty"));
        }
        Ok(())
    }
}
