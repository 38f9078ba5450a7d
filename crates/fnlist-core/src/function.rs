//! Locally known function metadata.

use crate::LoadError;

/// Local, already-loaded description of one function.
///
/// Descriptors are produced by a [`FunctionSource`](crate::FunctionSource)
/// and only borrowed by the reporter.
///
/// # Examples
///
/// ```
/// use fnlist_core::FunctionDescriptor;
///
/// let function = FunctionDescriptor::new("hello", "nodejs")
///     .with_memory(256)
///     .with_handler("index.handler");
///
/// assert_eq!(function.name, "hello");
/// assert_eq!(function.function_name, "hello");
/// assert_eq!(function.memory, 256);
/// assert!(function.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    /// Name of the function within its project.
    pub name: String,

    /// Name of the function as known to the remote provider.
    pub function_name: String,

    /// Free-form description, empty when unset.
    pub description: String,

    /// Runtime identifier (e.g. `nodejs`, `python3.12`).
    pub runtime: String,

    /// Memory limit in megabytes.
    pub memory: u32,

    /// Timeout in seconds.
    pub timeout: u32,

    /// Execution role identifier, empty when unset.
    pub role: String,

    /// Entry point identifier.
    pub handler: String,
}

impl FunctionDescriptor {
    /// Default memory limit in megabytes.
    pub const DEFAULT_MEMORY: u32 = 128;

    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT: u32 = 5;

    /// Default handler.
    pub const DEFAULT_HANDLER: &'static str = "index.handle";

    /// Creates a descriptor with default limits and handler.
    ///
    /// The remote function name defaults to `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, runtime: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            function_name: name.clone(),
            name,
            description: String::new(),
            runtime: runtime.into(),
            memory: Self::DEFAULT_MEMORY,
            timeout: Self::DEFAULT_TIMEOUT,
            role: String::new(),
            handler: Self::DEFAULT_HANDLER.to_string(),
        }
    }

    /// Sets the remote function name.
    #[must_use]
    pub fn with_function_name(mut self, function_name: impl Into<String>) -> Self {
        self.function_name = function_name.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the memory limit in megabytes.
    #[must_use]
    pub const fn with_memory(mut self, memory: u32) -> Self {
        self.memory = memory;
        self
    }

    /// Sets the timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the execution role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the handler.
    #[must_use]
    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = handler.into();
        self
    }

    /// Checks the descriptor's fields.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidFunction` if:
    /// - the name is empty or contains characters outside `[A-Za-z0-9_-]`
    /// - the runtime or handler is empty
    /// - memory or timeout is zero
    pub fn validate(&self) -> Result<(), LoadError> {
        let invalid = |reason: &str| LoadError::InvalidFunction {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if !is_valid_name(&self.name) {
            return Err(invalid(
                "name must be non-empty and contain only letters, digits, '-' or '_'",
            ));
        }
        if self.runtime.is_empty() {
            return Err(invalid("runtime is not set"));
        }
        if self.handler.is_empty() {
            return Err(invalid("handler is not set"));
        }
        if self.memory == 0 {
            return Err(invalid("memory must be greater than zero"));
        }
        if self.timeout == 0 {
            return Err(invalid("timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Returns whether `name` is usable as a function name.
///
/// Names end up in remote resource names and variable names, so only
/// ASCII letters, digits, `-` and `_` are allowed.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
