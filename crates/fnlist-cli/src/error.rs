//! Error conversion utilities for CLI.
//!
//! Converts fnlist-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use fnlist_core::LoadError;
use std::path::Path;

/// Converts `LoadError` to user-friendly anyhow error with context
pub fn convert_load_error(err: LoadError, project: &Path) -> anyhow::Error {
    match err {
        LoadError::Io { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
            anyhow!(
                "Project file or directory not found: '{}'\n\
                 HINT: Run fnlist from a project directory or pass -C <DIR>.",
                path.display()
            )
        }
        LoadError::Parse { path, source } => {
            anyhow!(
                "Invalid JSON in '{}': {}\n\
                 HINT: Check the file for syntax errors or unexpected value types.",
                path.display(),
                source
            )
        }
        LoadError::MissingProjectName { path } => {
            anyhow!(
                "Project in '{}' has no name\n\
                 HINT: Add a \"name\" field to {}.",
                project.display(),
                path.display()
            )
        }
        LoadError::InvalidFunction { name, reason } => {
            anyhow!(
                "Invalid function '{name}': {reason}\n\
                 HINT: Set the field in functions/{name}/function.json or in the project defaults."
            )
        }
        LoadError::FunctionNotFound { name } => {
            anyhow!(
                "Function '{name}' not found in project '{}'\n\
                 HINT: Function names are the directory names under functions/.",
                project.display()
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error loading project '{}'", project.display())),
    }
}

/// Adds context to a project load result
pub fn add_load_context<T>(result: Result<T, LoadError>, project: &Path) -> anyhow::Result<T> {
    result.map_err(|e| convert_load_error(e, project))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_missing_project_file() {
        let err = LoadError::Io {
            path: PathBuf::from("/srv/shop/project.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let converted = convert_load_error(err, Path::new("/srv/shop"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("not found"));
        assert!(msg.contains("project.json"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_function_not_found() {
        let err = LoadError::FunctionNotFound {
            name: "ghost".to_string(),
        };
        let converted = convert_load_error(err, Path::new("shop"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("'ghost'"));
        assert!(msg.contains("'shop'"));
    }

    #[test]
    fn test_convert_other_io_error_keeps_source() {
        let err = LoadError::Io {
            path: PathBuf::from("/srv/shop/functions"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let converted = convert_load_error(err, Path::new("/srv/shop"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("Error loading project"));
        assert!(msg.contains("denied"));
    }
}
