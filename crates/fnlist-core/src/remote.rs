//! Remote function state and the providers that fetch it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::FunctionDescriptor;
use crate::RemoteLookupError;

/// Point-in-time remote state of one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFunctionState {
    /// Stable remote resource identifier (ARN).
    pub identifier: String,

    /// Published version, `None` if the function was never published.
    pub published_version: Option<String>,
}

impl RemoteFunctionState {
    /// Creates a state with no published version.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            published_version: None,
        }
    }

    /// Sets the published version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.published_version = Some(version.into());
        self
    }
}

/// Fetches remote configuration for individual functions.
///
/// Each call is a fresh, blocking lookup. Implementations may impose their
/// own timeouts; callers do not cache results.
pub trait RemoteConfigProvider {
    /// Returns the configuration of the unqualified function.
    ///
    /// # Errors
    ///
    /// Returns `RemoteLookupError` if the function cannot be resolved.
    fn get_config(
        &self,
        function: &FunctionDescriptor,
    ) -> Result<RemoteFunctionState, RemoteLookupError>;

    /// Returns the configuration of the currently published version.
    ///
    /// # Errors
    ///
    /// Returns `RemoteLookupError` if the function cannot be resolved.
    fn get_current_config(
        &self,
        function: &FunctionDescriptor,
    ) -> Result<RemoteFunctionState, RemoteLookupError>;
}

impl<P: RemoteConfigProvider + ?Sized> RemoteConfigProvider for &P {
    fn get_config(
        &self,
        function: &FunctionDescriptor,
    ) -> Result<RemoteFunctionState, RemoteLookupError> {
        (**self).get_config(function)
    }

    fn get_current_config(
        &self,
        function: &FunctionDescriptor,
    ) -> Result<RemoteFunctionState, RemoteLookupError> {
        (**self).get_current_config(function)
    }
}

/// Alias naming the currently published version.
pub const CURRENT_ALIAS: &str = "current";

/// One function's record in a remote state snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotRecord {
    /// Function ARN.
    pub function_arn: String,

    /// Version of the unqualified function, usually `$LATEST`.
    #[serde(default)]
    pub version: Option<String>,

    /// Alias name to published version.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    functions: HashMap<String, SnapshotRecord>,
}

/// Provider answering from a JSON snapshot of remote state.
///
/// Records are keyed by remote function name:
///
/// ```json
/// {
///   "functions": {
///     "demo_hello": {
///       "function_arn": "arn:aws:lambda:us-east-1:123456789012:function:demo_hello",
///       "version": "$LATEST",
///       "aliases": { "current": "3" }
///     }
///   }
/// }
/// ```
///
/// # Examples
///
/// ```
/// use fnlist_core::FunctionDescriptor;
/// use fnlist_core::RemoteConfigProvider;
/// use fnlist_core::SnapshotProvider;
///
/// let provider = SnapshotProvider::from_json(
///     r#"{ "functions": { "hello": { "function_arn": "arn:hello", "aliases": { "current": "3" } } } }"#,
/// )
/// .unwrap();
///
/// let function = FunctionDescriptor::new("hello", "nodejs");
/// let state = provider.get_current_config(&function).unwrap();
/// assert_eq!(state.published_version.as_deref(), Some("3"));
/// ```
#[derive(Debug, Default)]
pub struct SnapshotProvider {
    functions: HashMap<String, SnapshotRecord>,
}

impl SnapshotProvider {
    /// Creates a provider with no records; every lookup fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns `RemoteLookupError::Provider` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, RemoteLookupError> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| RemoteLookupError::Provider(format!("invalid snapshot: {e}")))?;
        Ok(Self {
            functions: snapshot.functions,
        })
    }

    /// Reads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `RemoteLookupError::Provider` if the file cannot be read or
    /// parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RemoteLookupError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            RemoteLookupError::Provider(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if the snapshot has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    fn record(
        &self,
        function: &FunctionDescriptor,
    ) -> Result<&SnapshotRecord, RemoteLookupError> {
        let record = self.functions.get(&function.function_name).ok_or_else(|| {
            RemoteLookupError::NotFound {
                function_name: function.function_name.clone(),
            }
        })?;

        if record.function_arn.is_empty() {
            return Err(RemoteLookupError::InvalidRecord {
                function_name: function.function_name.clone(),
                reason: "function_arn is empty".to_string(),
            });
        }

        Ok(record)
    }
}

impl RemoteConfigProvider for SnapshotProvider {
    fn get_config(
        &self,
        function: &FunctionDescriptor,
    ) -> Result<RemoteFunctionState, RemoteLookupError> {
        let record = self.record(function)?;
        Ok(RemoteFunctionState {
            identifier: record.function_arn.clone(),
            published_version: record.version.clone(),
        })
    }

    fn get_current_config(
        &self,
        function: &FunctionDescriptor,
    ) -> Result<RemoteFunctionState, RemoteLookupError> {
        let record = self.record(function)?;
        Ok(RemoteFunctionState {
            identifier: record.function_arn.clone(),
            published_version: record.aliases.get(CURRENT_ALIAS).cloned(),
        })
    }
}

/// In-memory provider with explicit per-function answers.
///
/// Functions without an entry fail with `RemoteLookupError::NotFound`.
/// Lookups are keyed by remote function name.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    config: HashMap<String, Result<RemoteFunctionState, String>>,
    current: HashMap<String, Result<RemoteFunctionState, String>>,
}

impl StaticProvider {
    /// Creates a provider with no entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `get_config` for `function_name` with `state`.
    #[must_use]
    pub fn with_config(mut self, function_name: &str, state: RemoteFunctionState) -> Self {
        self.config.insert(function_name.to_string(), Ok(state));
        self
    }

    /// Answers `get_current_config` for `function_name` with `state`.
    #[must_use]
    pub fn with_current(mut self, function_name: &str, state: RemoteFunctionState) -> Self {
        self.current.insert(function_name.to_string(), Ok(state));
        self
    }

    /// Makes both lookups for `function_name` fail with `message`.
    #[must_use]
    pub fn with_failure(mut self, function_name: &str, message: &str) -> Self {
        self.config
            .insert(function_name.to_string(), Err(message.to_string()));
        self.current
            .insert(function_name.to_string(), Err(message.to_string()));
        self
    }

    fn answer(
        table: &HashMap<String, Result<RemoteFunctionState, String>>,
        function: &FunctionDescriptor,
    ) -> Result<RemoteFunctionState, RemoteLookupError> {
        match table.get(&function.function_name) {
            Some(Ok(state)) => Ok(state.clone()),
            Some(Err(message)) => Err(RemoteLookupError::Provider(message.clone())),
            None => Err(RemoteLookupError::NotFound {
                function_name: function.function_name.clone(),
            }),
        }
    }
}

impl RemoteConfigProvider for StaticProvider {
    fn get_config(
        &self,
        function: &FunctionDescriptor,
    ) -> Result<RemoteFunctionState, RemoteLookupError> {
        Self::answer(&self.config, function)
    }

    fn get_current_config(
        &self,
        function: &FunctionDescriptor,
    ) -> Result<RemoteFunctionState, RemoteLookupError> {
        Self::answer(&self.current, function)
    }
}
