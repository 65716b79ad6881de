//! External tool availability probes
//!
//! Preflight checks for the two external collaborators. The converters never
//! call these implicitly; they exist for callers that want to fail early and
//! for the test suite to skip scenarios a machine cannot run.

use std::process::{Command, Stdio};

use log::debug;

use crate::config::Settings;

/// Checks whether the notebook script exporter can be run
pub fn jupyter_available(settings: &Settings) -> bool {
    let available = Command::new(&settings.jupyter)
        .args(["nbconvert", "--version"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);

    debug!("{} nbconvert available: {}", settings.jupyter, available);

    available
}

/// Checks whether the extraction interpreter and its library can be run
pub fn r_available(settings: &Settings) -> bool {
    let available = Command::new(&settings.r)
        .args(["-e", "library(knitr)"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);

    debug!("{} with knitr available: {}", settings.r, available);

    available
}
