pub use convert::{
    convert_directory, convert_directory_with, convert_file_with, convert_markdown,
    convert_markdown_with, convert_notebook, convert_notebook_with, BatchResult, ConverterMode,
};
pub use errors::{Error, Result};

pub mod cli;
pub mod config;
pub mod constants;
pub mod convert;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::check_for_stdout_stream;
    pub use crate::config::Settings;
    pub use crate::convert::{
        convert_directory, convert_directory_with, convert_markdown, convert_markdown_with,
        convert_notebook, convert_notebook_with, jupyter_available, r_available, BatchResult,
        ConverterMode,
    };
    pub use crate::errors::{
        artifact_not_found_error, config_parsing_error, file_operation_error, generic_error,
        invalid_path_error, invocation_error, not_a_directory_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_default_logger, init_logger, LogLevel};
    pub use crate::workflow::{run, RunOptions};
}
