//! Function discovery.
//!
//! A [`FunctionSource`] yields the ordered collection of functions a report
//! runs over. [`ProjectSource`] reads a project directory from disk;
//! [`StaticSource`] wraps descriptors that are already in memory.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::FunctionDescriptor;
use crate::LoadError;
use crate::config::FunctionConfig;
use crate::config::ProjectConfig;

/// Produces the functions of a project, in a stable order.
pub trait FunctionSource {
    /// Loads all function descriptors.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the functions cannot be enumerated or a
    /// definition is invalid. No partial result is returned.
    fn load(&self) -> Result<Vec<FunctionDescriptor>, LoadError>;
}

/// Source backed by descriptors already in memory.
///
/// # Examples
///
/// ```
/// use fnlist_core::FunctionDescriptor;
/// use fnlist_core::FunctionSource;
/// use fnlist_core::StaticSource;
///
/// let source = StaticSource::new(vec![FunctionDescriptor::new("hello", "nodejs")]);
/// let functions = source.load().unwrap();
/// assert_eq!(functions[0].name, "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    functions: Vec<FunctionDescriptor>,
}

impl StaticSource {
    /// Creates a source returning `functions` in the given order.
    #[must_use]
    pub fn new(functions: Vec<FunctionDescriptor>) -> Self {
        Self { functions }
    }
}

impl FunctionSource for StaticSource {
    fn load(&self) -> Result<Vec<FunctionDescriptor>, LoadError> {
        validate_all(&self.functions)?;
        Ok(self.functions.clone())
    }
}

/// Source backed by a project directory.
///
/// Layout:
///
/// ```text
/// <root>/project.json             name, description, function defaults
/// <root>/project.<env>.json       used instead when an environment is set
/// <root>/functions/<name>/        one directory per function
/// <root>/functions/<name>/function.json   optional overrides
/// ```
///
/// Functions are returned sorted by directory name.
#[derive(Debug, Clone)]
pub struct ProjectSource {
    root: PathBuf,
    env: Option<String>,
    names: Vec<String>,
}

impl ProjectSource {
    /// Project file name.
    pub const PROJECT_FILE: &'static str = "project.json";

    /// Function file name inside each function directory.
    pub const FUNCTION_FILE: &'static str = "function.json";

    /// Directory holding the function directories.
    pub const FUNCTIONS_DIR: &'static str = "functions";

    /// Creates a source for the project rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            env: None,
            names: Vec::new(),
        }
    }

    /// Reads `project.<env>.json` instead of `project.json`.
    #[must_use]
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Restricts the result to the named functions.
    ///
    /// Order still follows the project, not `names`. An empty list selects
    /// every function.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the project file in use.
    #[must_use]
    pub fn project_file(&self) -> PathBuf {
        match &self.env {
            Some(env) => self.root.join(format!("project.{env}.json")),
            None => self.root.join(Self::PROJECT_FILE),
        }
    }

    /// Reads and parses the project file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file is missing, malformed, or has no
    /// project name.
    pub fn load_project(&self) -> Result<ProjectConfig, LoadError> {
        let path = self.project_file();
        let project: ProjectConfig = read_json(&path)?;

        match project.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(project),
            _ => Err(LoadError::MissingProjectName { path }),
        }
    }

    fn function_dirs(&self) -> Result<Vec<String>, LoadError> {
        let dir = self.root.join(Self::FUNCTIONS_DIR);
        let io_err = |source| LoadError::Io {
            path: dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if !entry.file_type().map_err(io_err)?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }

        names.sort();
        Ok(names)
    }

    fn load_function(
        &self,
        name: &str,
        project: &ProjectConfig,
    ) -> Result<FunctionDescriptor, LoadError> {
        let path = self
            .root
            .join(Self::FUNCTIONS_DIR)
            .join(name)
            .join(Self::FUNCTION_FILE);

        let config: FunctionConfig = if path.is_file() {
            read_json(&path)?
        } else {
            FunctionConfig::default()
        };

        let descriptor = config.resolve(name, project);
        descriptor.validate()?;
        Ok(descriptor)
    }
}

impl FunctionSource for ProjectSource {
    fn load(&self) -> Result<Vec<FunctionDescriptor>, LoadError> {
        let project = self.load_project()?;
        let dirs = self.function_dirs()?;

        for name in &self.names {
            if !dirs.contains(name) {
                return Err(LoadError::FunctionNotFound { name: name.clone() });
            }
        }

        let functions = dirs
            .iter()
            .filter(|dir| self.names.is_empty() || self.names.contains(dir))
            .map(|dir| self.load_function(dir, &project))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            root = %self.root.display(),
            count = functions.len(),
            "loaded project functions"
        );

        Ok(functions)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_all(functions: &[FunctionDescriptor]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for function in functions {
        function.validate()?;
        if !seen.insert(function.name.as_str()) {
            return Err(LoadError::DuplicateFunction {
                name: function.name.clone(),
            });
        }
    }
    Ok(())
}
