//! Configuration loading functionality
//!
//! This module contains functions for loading and validating settings.

use std::fs;
use std::path::PathBuf;

use log::{debug, info};
use serde_yaml::from_str;

use crate::errors::{config_parsing_error, Result};
use crate::utils::find_project_folder;

use super::model::Settings;

/// Loads settings from a file
///
/// A missing file is not an error; every setting has a default and the tool
/// is expected to work without any configuration at all.
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Settings>` - The loaded settings or an error
///
/// # Errors
/// Returns an error if the file exists but cannot be read, is not valid
/// YAML, or fails validation
pub fn load_settings(file: PathBuf) -> Result<Settings> {
    if !file.exists() {
        debug!(
            "No configuration file at {}, using defaults",
            file.display()
        );
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&file).map_err(|e| {
        config_parsing_error(
            e,
            &format!("Failed to read configuration file {}", file.display()),
        )
    })?;

    let settings: Settings = from_str(&content).map_err(|e| {
        config_parsing_error(
            e,
            &format!(
                "Failed to parse configuration file {}\nPlease check the YAML syntax.",
                file.display()
            ),
        )
    })?;

    settings.validate()?;

    info!("Loaded configuration from {}", file.display());

    Ok(settings)
}

/// Reads an existing configuration file or resolves it against the standard
/// configuration directory if it doesn't exist
///
/// # Errors
/// Returns an error if the configuration directory cannot be determined
pub fn read_or_create(config: PathBuf) -> Result<PathBuf> {
    if !&config.exists() {
        create_config_if_not_exists(config)
    } else {
        Ok(config)
    }
}

/// Resolves a configuration file against the platform configuration
/// directory, creating the directory if necessary
fn create_config_if_not_exists(config: PathBuf) -> Result<PathBuf> {
    let folder = find_project_folder()?;
    Ok(folder.config_dir().join(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConverterMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nbconv.yaml");
        fs::write(&file, "jupyter: /opt/jupyter/bin/jupyter\nmode: notebook\n").unwrap();

        let settings = load_settings(file).unwrap();
        assert_eq!(settings.jupyter, "/opt/jupyter/bin/jupyter");
        assert_eq!(settings.r, "R", "Absent fields should keep their defaults");
        assert_eq!(settings.mode, ConverterMode::Notebook);
    }

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_invalid_yaml() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nbconv.yaml");
        fs::write(&file, "jupyter: [unterminated\n").unwrap();

        let result = load_settings(file);
        assert!(result.is_err(), "Broken YAML should be rejected");
    }

    #[test]
    fn test_load_settings_rejects_empty_binary() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nbconv.yaml");
        fs::write(&file, "r: \"\"\n").unwrap();

        let result = load_settings(file);
        assert!(result.is_err(), "Empty tool binaries should be rejected");
    }
}
