//! Project and function configuration files.
//!
//! A project directory holds a `project.json` with the project name and the
//! defaults shared by every function, plus one directory per function under
//! `functions/`, each with an optional `function.json` overriding those
//! defaults.

use serde::Deserialize;

use crate::FunctionDescriptor;

/// Function settings that may appear in both `project.json` and
/// `function.json`.
///
/// Every field is optional; unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FunctionSettings {
    /// Runtime identifier.
    pub runtime: Option<String>,

    /// Memory limit in megabytes.
    pub memory: Option<u32>,

    /// Timeout in seconds.
    pub timeout: Option<u32>,

    /// Execution role.
    pub role: Option<String>,

    /// Entry point.
    pub handler: Option<String>,
}

impl FunctionSettings {
    /// Layers `self` over `base`: fields set in `self` win.
    #[must_use]
    pub fn merged_over(&self, base: &Self) -> Self {
        Self {
            runtime: self.runtime.clone().or_else(|| base.runtime.clone()),
            memory: self.memory.or(base.memory),
            timeout: self.timeout.or(base.timeout),
            role: self.role.clone().or_else(|| base.role.clone()),
            handler: self.handler.clone().or_else(|| base.handler.clone()),
        }
    }
}

/// Contents of `project.json`.
///
/// # Examples
///
/// ```
/// use fnlist_core::config::ProjectConfig;
///
/// let config: ProjectConfig = serde_json::from_str(
///     r#"{ "name": "demo", "runtime": "nodejs", "memory": 256 }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.name.as_deref(), Some("demo"));
/// assert_eq!(config.defaults.memory, Some(256));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Project name, used as the prefix of remote function names.
    #[serde(default)]
    pub name: Option<String>,

    /// Project description. Not inherited by functions.
    #[serde(default)]
    pub description: String,

    /// Defaults for every function in the project.
    #[serde(flatten)]
    pub defaults: FunctionSettings,
}

/// Contents of `functions/<name>/function.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionConfig {
    /// Function description.
    #[serde(default)]
    pub description: String,

    /// Per-function overrides.
    #[serde(flatten)]
    pub settings: FunctionSettings,
}

impl FunctionConfig {
    /// Resolves this function's configuration against the project.
    ///
    /// Built-in defaults apply to memory, timeout, handler and role when
    /// neither layer sets them. Runtime has no built-in default and is left
    /// empty, which [`FunctionDescriptor::validate`] rejects.
    #[must_use]
    pub fn resolve(&self, name: &str, project: &ProjectConfig) -> FunctionDescriptor {
        let settings = self.settings.merged_over(&project.defaults);
        let function_name = project
            .name
            .as_deref()
            .map_or_else(|| name.to_string(), |p| format!("{p}_{name}"));

        FunctionDescriptor {
            name: name.to_string(),
            function_name,
            description: self.description.clone(),
            runtime: settings.runtime.unwrap_or_default(),
            memory: settings.memory.unwrap_or(FunctionDescriptor::DEFAULT_MEMORY),
            timeout: settings
                .timeout
                .unwrap_or(FunctionDescriptor::DEFAULT_TIMEOUT),
            role: settings.role.unwrap_or_default(),
            handler: settings
                .handler
                .unwrap_or_else(|| FunctionDescriptor::DEFAULT_HANDLER.to_string()),
        }
    }
}
