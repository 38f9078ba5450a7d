//! Function reporting.
//!
//! The [`Reporter`] walks the functions in order, performs the remote lookup
//! the selected [`OutputMode`] needs, and hands each result to that mode's
//! formatter. A failed lookup degrades or omits its function; it never
//! stops the report.

use std::io::Write;

use tracing::debug;

use crate::FunctionDescriptor;
use crate::RemoteConfigProvider;
use crate::RemoteFunctionState;
use crate::RemoteLookupError;
use crate::Result;
use crate::output::ReportFormatter;
use crate::output::TextFormatter;
use crate::output::VarFormatter;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Detail block per function, including the current published version.
    #[default]
    Text,
    /// One `apex_function_<name>="<arn>"` line per resolved function.
    Vars,
}

impl OutputMode {
    /// Performs the lookup this mode renders.
    ///
    /// Text mode needs the published version, so it asks for the current
    /// configuration; vars mode needs the function ARN.
    pub fn lookup<P: RemoteConfigProvider + ?Sized>(
        self,
        provider: &P,
        function: &FunctionDescriptor,
    ) -> std::result::Result<RemoteFunctionState, RemoteLookupError> {
        match self {
            Self::Text => provider.get_current_config(function),
            Self::Vars => provider.get_config(function),
        }
    }

    /// Returns the formatter for this mode.
    ///
    /// `use_colors` only affects text mode.
    #[must_use]
    pub fn formatter(self, use_colors: bool) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(use_colors)),
            Self::Vars => Box::new(VarFormatter),
        }
    }
}

/// One function paired with the outcome of its remote lookup.
#[derive(Debug)]
pub struct ReportEntry<'a> {
    /// The local function description.
    pub descriptor: &'a FunctionDescriptor,

    /// Remote state, or why it could not be fetched.
    pub remote: std::result::Result<RemoteFunctionState, RemoteLookupError>,
}

impl<'a> ReportEntry<'a> {
    /// Creates an entry.
    #[must_use]
    pub fn new(
        descriptor: &'a FunctionDescriptor,
        remote: std::result::Result<RemoteFunctionState, RemoteLookupError>,
    ) -> Self {
        Self { descriptor, remote }
    }

    /// Returns the remote state if the lookup succeeded.
    #[must_use]
    pub fn remote_state(&self) -> Option<&RemoteFunctionState> {
        self.remote.as_ref().ok()
    }
}

/// Counts from a completed report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Functions in the input.
    pub functions: usize,

    /// Functions whose remote lookup succeeded.
    pub resolved: usize,

    /// Functions that produced output.
    pub emitted: usize,
}

impl ReportSummary {
    /// Returns the number of functions whose lookup failed.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.functions - self.resolved
    }
}

/// Drives per-function lookups and output for one provider.
///
/// # Examples
///
/// ```
/// use fnlist_core::FunctionDescriptor;
/// use fnlist_core::OutputMode;
/// use fnlist_core::RemoteFunctionState;
/// use fnlist_core::Reporter;
/// use fnlist_core::StaticProvider;
///
/// let functions = vec![
///     FunctionDescriptor::new("hello", "nodejs"),
///     FunctionDescriptor::new("world", "nodejs"),
/// ];
/// let provider = StaticProvider::new()
///     .with_config("hello", RemoteFunctionState::new("arn:aws:lambda:hello"));
///
/// let mut out = Vec::new();
/// let summary = Reporter::new(&provider)
///     .run(&functions, OutputMode::Vars, &mut out)
///     .unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "apex_function_hello=\"arn:aws:lambda:hello\"\n"
/// );
/// assert_eq!(summary.emitted, 1);
/// assert_eq!(summary.failed(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Reporter<P> {
    provider: P,
    use_colors: bool,
}

impl<P: RemoteConfigProvider> Reporter<P> {
    /// Creates a reporter without colors.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            use_colors: false,
        }
    }

    /// Enables or disables colored function names in text mode.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Looks up every function, in order, for `mode`.
    ///
    /// Never fails: lookup errors are kept in the returned entries.
    pub fn collect<'a>(
        &self,
        functions: &'a [FunctionDescriptor],
        mode: OutputMode,
    ) -> Vec<ReportEntry<'a>> {
        functions
            .iter()
            .map(|function| self.entry(function, mode))
            .collect()
    }

    /// Writes the report for `functions` to `out`.
    ///
    /// Functions are processed one at a time in input order. Lookup failures
    /// are logged at debug level and absorbed.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Sink` if writing to `out` fails.
    pub fn run<W: Write + ?Sized>(
        &self,
        functions: &[FunctionDescriptor],
        mode: OutputMode,
        out: &mut W,
    ) -> Result<ReportSummary> {
        let formatter = mode.formatter(self.use_colors);
        let mut out = WriteAdapter(out);
        let mut summary = ReportSummary {
            functions: functions.len(),
            ..ReportSummary::default()
        };

        formatter.begin(&mut out)?;
        for function in functions {
            let entry = self.entry(function, mode);
            if entry.remote.is_ok() {
                summary.resolved += 1;
            }
            if formatter.format_entry(&mut out, &entry)? {
                summary.emitted += 1;
            }
        }
        out.flush()?;

        debug!(
            ?mode,
            functions = summary.functions,
            resolved = summary.resolved,
            emitted = summary.emitted,
            "report complete"
        );

        Ok(summary)
    }

    fn entry<'a>(&self, function: &'a FunctionDescriptor, mode: OutputMode) -> ReportEntry<'a> {
        let remote = mode.lookup(&self.provider, function);
        if let Err(e) = &remote {
            debug!(
                function = %function.name,
                remote_name = %function.function_name,
                error = %e,
                "can't fetch function config"
            );
        }
        ReportEntry::new(function, remote)
    }
}

/// Lets an unsized writer be passed where `&mut dyn Write` is expected.
struct WriteAdapter<'w, W: ?Sized>(&'w mut W);

impl<W: Write + ?Sized> Write for WriteAdapter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ReportError;
    use crate::StaticProvider;
    use std::io;

    fn functions() -> Vec<FunctionDescriptor> {
        vec![
            FunctionDescriptor::new("hello", "nodejs")
                .with_timeout(3)
                .with_role("r1")
                .with_handler("index.handler"),
            FunctionDescriptor::new("world", "python3.12").with_description("greets"),
        ]
    }

    fn run(
        provider: &StaticProvider,
        functions: &[FunctionDescriptor],
        mode: OutputMode,
    ) -> String {
        let mut out = Vec::new();
        Reporter::new(provider).run(functions, mode, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report_scenario() {
        let provider = StaticProvider::new().with_current(
            "hello",
            RemoteFunctionState::new("arn:hello").with_version("3"),
        );

        let text = run(&provider, &functions()[..1], OutputMode::Text);
        assert_eq!(
            text,
            "\n  hello\n    runtime: nodejs\n    memory: 128mb\n    timeout: 3s\n    \
             role: r1\n    handler: index.handler\n    current version: 3\n\n"
        );
    }

    #[test]
    fn test_vars_report_scenario() {
        let provider = StaticProvider::new().with_config(
            "hello",
            RemoteFunctionState::new("arn:aws:lambda:us-east-1:1:function:hello"),
        );

        let vars = run(&provider, &functions()[..1], OutputMode::Vars);
        assert_eq!(
            vars,
            "apex_function_hello=\"arn:aws:lambda:us-east-1:1:function:hello\"\n"
        );
    }

    #[test]
    fn test_text_mode_uses_current_config_only() {
        let provider = StaticProvider::new().with_config(
            "hello",
            RemoteFunctionState::new("arn:hello").with_version("$LATEST"),
        );

        let text = run(&provider, &functions(), OutputMode::Text);
        assert!(!text.contains("current version"));
        assert!(text.contains("  hello\n"));
        assert!(text.contains("  world\n"));
    }

    #[test]
    fn test_text_failure_continues() {
        let provider = StaticProvider::new()
            .with_failure("hello", "access denied")
            .with_current(
                "world",
                RemoteFunctionState::new("arn:world").with_version("7"),
            );

        let text = run(&provider, &functions(), OutputMode::Text);
        let hello = text.find("  hello\n").unwrap();
        let world = text.find("  world\n").unwrap();
        assert!(hello < world);
        assert!(text.contains("    current version: 7\n"));
        assert_eq!(text.matches("current version").count(), 1);
    }

    #[test]
    fn test_vars_failure_omits_function() {
        let provider = StaticProvider::new()
            .with_failure("hello", "access denied")
            .with_config("world", RemoteFunctionState::new("arn:world"));

        let vars = run(&provider, &functions(), OutputMode::Vars);
        assert_eq!(vars, "apex_function_world=\"arn:world\"\n");
    }

    #[test]
    fn test_empty_input() {
        let provider = StaticProvider::new();
        assert_eq!(run(&provider, &[], OutputMode::Text), "\n");
        assert_eq!(run(&provider, &[], OutputMode::Vars), "");
    }

    #[test]
    fn test_summary_counts() {
        let provider = StaticProvider::new().with_config("world", RemoteFunctionState::new("arn"));
        let mut out = Vec::new();

        let summary = Reporter::new(&provider)
            .run(&functions(), OutputMode::Vars, &mut out)
            .unwrap();
        assert_eq!(
            summary,
            ReportSummary {
                functions: 2,
                resolved: 1,
                emitted: 1,
            }
        );

        let summary = Reporter::new(&provider)
            .run(&functions(), OutputMode::Text, &mut out)
            .unwrap();
        assert_eq!(summary.emitted, 2);
        assert_eq!(summary.failed(), 2);
    }

    #[test]
    fn test_collect_pairs_each_function() {
        let provider = StaticProvider::new().with_config("hello", RemoteFunctionState::new("arn"));
        let functions = functions();

        let entries = Reporter::new(&provider).collect(&functions, OutputMode::Vars);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].descriptor.name, "hello");
        assert!(entries[0].remote_state().is_some());
        assert!(matches!(
            entries[1].remote,
            Err(RemoteLookupError::NotFound { .. })
        ));
    }

    #[test]
    fn test_sink_failure_aborts() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let provider = StaticProvider::new();
        let err = Reporter::new(&provider)
            .run(&functions(), OutputMode::Text, &mut FailingSink)
            .unwrap_err();
        assert!(matches!(err, ReportError::Sink(_)));
    }

    #[test]
    fn test_colors_only_affect_names() {
        let provider = StaticProvider::new();
        let mut out = Vec::new();
        Reporter::new(&provider)
            .with_colors(true)
            .run(&functions()[..1], OutputMode::Text, &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}[34mhello\u{1b}[0m"));
        assert!(text.contains("    runtime: nodejs\n"));
    }
}
