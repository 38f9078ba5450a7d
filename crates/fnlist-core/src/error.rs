//! Error types for loading, remote lookups, and reporting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ReportError`.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that prevent the function collection from being enumerated.
///
/// A load error is fatal: no report is produced.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading a project file or directory failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration file is not valid JSON for its schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// The project configuration has no name.
    #[error("project name is missing in {path}")]
    MissingProjectName {
        /// The project file.
        path: PathBuf,
    },

    /// A function definition failed validation.
    #[error("invalid function '{name}': {reason}")]
    InvalidFunction {
        /// The function name.
        name: String,
        /// Why the definition was rejected.
        reason: String,
    },

    /// Two functions share the same name.
    #[error("duplicate function '{name}'")]
    DuplicateFunction {
        /// The repeated name.
        name: String,
    },

    /// A requested function does not exist in the project.
    #[error("function '{name}' not found")]
    FunctionNotFound {
        /// The requested name.
        name: String,
    },
}

/// Errors from a single per-function remote lookup.
///
/// The reporter absorbs these: the affected function is degraded or omitted.
#[derive(Error, Debug)]
pub enum RemoteLookupError {
    /// The provider has no record of the function.
    #[error("function '{function_name}' not found")]
    NotFound {
        /// The remote function name that was looked up.
        function_name: String,
    },

    /// The provider returned a record that cannot be used.
    #[error("invalid record for '{function_name}': {reason}")]
    InvalidRecord {
        /// The remote function name.
        function_name: String,
        /// What is wrong with the record.
        reason: String,
    },

    /// The provider itself failed.
    #[error("remote provider error: {0}")]
    Provider(String),
}

/// Errors that abort a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Writing to the output sink failed.
    #[error("failed to write report: {0}")]
    Sink(#[from] std::io::Error),
}

impl LoadError {
    /// Returns the file path associated with this error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnlist_core::LoadError;
    /// use std::path::PathBuf;
    ///
    /// let err = LoadError::MissingProjectName {
    ///     path: PathBuf::from("project.json"),
    /// };
    /// assert_eq!(err.path(), Some(PathBuf::from("project.json").as_path()));
    ///
    /// let err = LoadError::FunctionNotFound { name: "api".into() };
    /// assert_eq!(err.path(), None);
    /// ```
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::MissingProjectName { path } => Some(path),
            _ => None,
        }
    }
}
