use atty::Stream;
use clap::{command, crate_description, crate_name, crate_version, Arg, ArgMatches};
use std::path::PathBuf;

use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DRY_RUN_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT,
    LOG_FILE_HELP, MODE_HELP, PATH_HELP, VERBOSE_HELP,
};
use crate::convert::ConverterMode;
use crate::errors::{generic_error, Result};
use crate::logging::LogLevel;
use crate::utils::{expand_tilde, find_project_folder};

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a GUI.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Sets up and returns command-line argument matches
///
/// Defines the following arguments:
/// - `path`: File or directory to convert
/// - `mode`: Which file types a directory run converts
/// - `config`: Path to the configuration file
/// - `dry`: Report planned conversions without invoking any tool
/// - `verbose`: Increase verbosity level
///
/// # Returns
/// * `Result<ArgMatches>` - The parsed command-line arguments
///
/// # Errors
/// Returns an error if the command-line arguments cannot be parsed
pub fn get_matches() -> Result<ArgMatches> {
    // define arg for the conversion target
    let arg_path = Arg::new("path").help(PATH_HELP).required(true);

    // define arg for the batch mode selector
    let arg_mode = Arg::new("mode").short('m').long("mode").help(MODE_HELP);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    let matches = command!()
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_path)
        .arg(arg_mode)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .get_matches();

    Ok(matches)
}

/// Gets the conversion target from the command-line arguments
///
/// The path is tilde-expanded so shell-style home references work even when
/// the shell never saw them.
pub fn get_target(matches: &ArgMatches) -> Result<PathBuf> {
    let raw = matches
        .get_one::<String>("path")
        .ok_or_else(|| generic_error("Conversion target not found"))?;
    Ok(expand_tilde(raw))
}

/// Gets the batch mode override from the command-line arguments
///
/// # Errors
/// Returns an error if the mode string is not one of the known selectors
pub fn get_mode(matches: &ArgMatches) -> Result<Option<ConverterMode>> {
    match matches.get_one::<String>("mode") {
        None => Ok(None),
        Some(raw) => raw
            .parse::<ConverterMode>()
            .map(Some)
            .map_err(|e| generic_error(&e)),
    }
}

/// Gets the configuration file path from the command-line arguments
pub fn get_config_path(matches: &ArgMatches) -> Result<PathBuf> {
    let raw = matches
        .get_one::<String>("config")
        .ok_or_else(|| generic_error("Configuration file option not found"))?;
    Ok(expand_tilde(raw))
}

/// Gets the verbosity level from the command-line arguments
///
/// Counts the occurrences of the "verbose" flag and converts the count to a
/// LogLevel value.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file location from the command-line arguments
///
/// Unless local logging was requested, the log file lives in the platform's
/// configuration directory for the application.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path.as_path().to_str().ok_or_else(|| {
            generic_error(&format!("Failed to convert path to string: {:?}", path))
        })?;
        Ok(path_str.to_string())
    }
}
