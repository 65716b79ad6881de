use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the notebook conversion application
#[derive(Debug)]
pub enum Error {
    /// Error when an external tool fails to start or exits non-zero
    Invocation {
        tool: String,
        status: Option<i32>,
        detail: String,
    },
    /// Error when a tool ran successfully but its output file cannot be found
    ArtifactNotFound { path: PathBuf },
    /// Error when a batch target is not an existing directory
    NotADirectory { path: PathBuf },
    /// Error when a path cannot be represented for command embedding
    InvalidPath { path: PathBuf },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Invocation {
                tool,
                status,
                detail,
            } => match status {
                Some(code) => {
                    if detail.is_empty() {
                        write!(f, "External tool '{tool}' failed with exit code {code}")
                    } else {
                        write!(
                            f,
                            "External tool '{tool}' failed with exit code {code}: {detail}"
                        )
                    }
                }
                None => write!(f, "External tool '{tool}' could not be run: {detail}"),
            },
            Error::ArtifactNotFound { path } => {
                write!(
                    f,
                    "Could not find the converted script for {}",
                    path.display()
                )
            }
            Error::NotADirectory { path } => {
                write!(f, "{} is not a directory", path.display())
            }
            Error::InvalidPath { path } => {
                write!(f, "Path is not valid unicode: {}", path.display())
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the notebook conversion application
///
/// This type alias simplifies error handling throughout the application by
/// using the custom Error type. It's used as the return type for most
/// functions that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an invocation error
pub fn invocation_error(tool: &str, status: Option<i32>, detail: &str) -> Error {
    Error::Invocation {
        tool: tool.to_string(),
        status,
        detail: detail.to_string(),
    }
}

/// Helper function to create an artifact-not-found error
pub fn artifact_not_found_error(path: PathBuf) -> Error {
    Error::ArtifactNotFound { path }
}

/// Helper function to create a not-a-directory error
pub fn not_a_directory_error(path: PathBuf) -> Error {
    Error::NotADirectory { path }
}

/// Helper function to create an invalid path error
pub fn invalid_path_error(path: PathBuf) -> Error {
    Error::InvalidPath { path }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_error_with_exit_code() {
        let error = invocation_error("jupyter", Some(1), "no such kernel");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("jupyter"),
            "Error message should contain the tool name"
        );
        assert!(
            error_string.contains("exit code 1"),
            "Error message should contain the exit code"
        );
        assert!(
            error_string.contains("no such kernel"),
            "Error message should contain the tool's diagnostic"
        );
    }

    #[test]
    fn test_invocation_error_without_exit_code() {
        let error = invocation_error("R", None, "No such file or directory");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("could not be run"),
            "Error message should distinguish spawn failures from tool failures"
        );
        assert!(
            error_string.contains("R"),
            "Error message should contain the tool name"
        );
    }

    #[test]
    fn test_invocation_error_with_empty_detail() {
        let error = invocation_error("jupyter", Some(2), "");

        let error_string = format!("{error}");
        assert!(
            error_string.ends_with("exit code 2"),
            "Error message should not carry a dangling separator"
        );
    }

    #[test]
    fn test_artifact_not_found_error() {
        let path = PathBuf::from("/test/sample_python.ipynb");
        let error = artifact_not_found_error(path);

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/sample_python.ipynb"),
            "Error message should contain the input path"
        );
        assert!(
            error_string.contains("converted script"),
            "Error message should describe the missing artifact"
        );
    }

    #[test]
    fn test_not_a_directory_error() {
        let path = PathBuf::from("/test/not_a_dir.txt");
        let error = not_a_directory_error(path);

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/not_a_dir.txt"),
            "Error message should contain the path"
        );
        assert!(
            error_string.contains("not a directory"),
            "Error message should state the problem"
        );
    }

    #[test]
    fn test_invalid_path_error() {
        let path = PathBuf::from("/test/strange");
        let error = invalid_path_error(path);

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/strange"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = file_operation_error(io_error, path.clone(), "read");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("read"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_config_parsing_error() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "Invalid YAML");
        let error = config_parsing_error(io_error, "Missing required field");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Missing required field"),
            "Error message should contain the detail"
        );
    }

    #[test]
    fn test_generic_error() {
        let error = generic_error("Something went wrong");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Something went wrong"),
            "Error message should contain the message"
        );
    }

    #[test]
    fn test_error_conversion() {
        // Conversion from io::Error to Error
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Failed to perform operation on file"),
            "Error message should contain the underlying error"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = file_operation_error(io_error, PathBuf::from("/test"), "scan");
        assert!(
            error.source().is_some(),
            "File operation errors should expose their io source"
        );

        let error = artifact_not_found_error(PathBuf::from("/test"));
        assert!(
            error.source().is_none(),
            "Artifact errors have no underlying source"
        );
    }
}
