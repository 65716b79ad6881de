/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "io";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "notebook-convert";

/// Application name used for identification
///
/// This is the name used in various contexts like configuration file
/// paths and application identification.
pub const APPLICATION: &str = "nbconv";

/// Default binary name of the notebook script exporter
pub const JUPYTER_DEFAULT: &str = "jupyter";

/// Default binary name of the code-extraction interpreter
pub const R_DEFAULT: &str = "R";

/// Extension carried by notebook input files
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Extension carried by markdown-with-embedded-code input files
pub const MARKDOWN_EXTENSION: &str = "Rmd";

/// Extension given to scripts extracted from markdown inputs
pub const SCRIPT_EXTENSION: &str = "r";

/// Filename pattern matching notebook inputs during a directory scan
pub const NOTEBOOK_GLOB: &str = "*.ipynb";

/// Filename pattern matching markdown inputs during a directory scan
pub const MARKDOWN_GLOB: &str = "*.Rmd";

/// Help text for the path command-line argument
pub const PATH_HELP: &str = "Notebook file, markdown file, or directory to convert";

/// Help text for the mode command-line option
pub const MODE_HELP: &str = "Which file types a directory run converts: notebook, markdown or both";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Report what would be converted without invoking any tool";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local-logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file to the working directory";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "nbconv.yaml";

/// Default filename for the log file
pub const LOG_FILE_DEFAULT: &str = "nbconv.log";
