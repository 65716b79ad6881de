use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{file_operation_error, generic_error, invalid_path_error, Result};

/// Resolve a path against the current directory without touching the filesystem
///
/// Unlike `canonicalize`, this never requires the path to exist: a missing
/// input must still reach the external tool so the failure surfaces as a
/// tool-level error.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "resolve"))
}

/// Get a path as a unicode string
///
/// Command embedding needs the path as text; anything that is not valid
/// unicode cannot be represented safely.
pub fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| invalid_path_error(path.to_path_buf()))
}

/// Get the filename stem of a path as a unicode string
pub fn file_stem_str(path: &Path) -> Result<&str> {
    path.file_stem()
        .ok_or_else(|| invalid_path_error(path.to_path_buf()))
        .and_then(|os_str| {
            os_str
                .to_str()
                .ok_or_else(|| invalid_path_error(path.to_path_buf()))
        })
}

/// Expand a leading tilde in a user-supplied path
pub fn expand_tilde(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).to_string())
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}

#[cfg(unix)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.starts_with('.'))
}

#[cfg(windows)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    if let Ok(metadata) = path.metadata() {
        metadata.file_attributes() & 0x2 != 0 // FILE_ATTRIBUTE_HIDDEN
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_of_relative_input() {
        let resolved = absolute_path(Path::new("sample.Rmd")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("sample.Rmd"));
    }

    #[test]
    fn test_absolute_path_does_not_require_existence() {
        let resolved = absolute_path(Path::new("definitely/not/here.ipynb"));
        assert!(resolved.is_ok(), "Resolution must not check existence");
    }

    #[test]
    fn test_file_stem_str() {
        assert_eq!(
            file_stem_str(Path::new("/data/sample_python.ipynb")).unwrap(),
            "sample_python"
        );
        assert_eq!(file_stem_str(Path::new("plain")).unwrap(), "plain");
    }

    #[test]
    fn test_expand_tilde_keeps_plain_paths() {
        assert_eq!(expand_tilde("/data/notebooks"), PathBuf::from("/data/notebooks"));
    }
}
