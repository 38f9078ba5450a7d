//! Variable-assignment output for infrastructure tooling.

use std::fmt::Write as _;
use std::io;
use std::io::Write;

use tracing::debug;

use super::formatter::ReportFormatter;
use crate::ReportEntry;

/// Namespace prefix of every emitted variable.
pub const VAR_PREFIX: &str = "apex_function";

/// Renders one `apex_function_<name>="<arn>"` line per resolved function.
///
/// Functions whose lookup failed, or whose identifier is empty, produce no
/// output. The line format is parsed by downstream tooling and must stay
/// stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct VarFormatter;

impl VarFormatter {
    /// Returns the variable name for a function.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnlist_core::output::VarFormatter;
    ///
    /// assert_eq!(VarFormatter::variable_name("hello"), "apex_function_hello");
    /// ```
    #[must_use]
    pub fn variable_name(function: &str) -> String {
        format!("{VAR_PREFIX}_{function}")
    }
}

impl ReportFormatter for VarFormatter {
    fn format_entry(&self, out: &mut dyn Write, entry: &ReportEntry<'_>) -> io::Result<bool> {
        let Ok(state) = &entry.remote else {
            return Ok(false);
        };

        if state.identifier.is_empty() {
            debug!(function = %entry.descriptor.name, "skipping function with empty identifier");
            return Ok(false);
        }

        writeln!(
            out,
            "{}={}",
            Self::variable_name(&entry.descriptor.name),
            quote(&state.identifier)
        )?;
        Ok(true)
    }
}

/// Wraps `value` in double quotes, escaping `"`, `\` and control characters.
///
/// # Examples
///
/// ```
/// use fnlist_core::output::quote;
///
/// assert_eq!(quote("arn:aws:lambda"), r#""arn:aws:lambda""#);
/// assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
/// assert_eq!(quote("a\nb"), r#""a\nb""#);
/// ```
#[must_use]
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(quoted, "\\x{:02x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::FunctionDescriptor;
    use crate::RemoteFunctionState;
    use crate::RemoteLookupError;

    fn render(entry: &ReportEntry<'_>) -> (bool, String) {
        let mut out = Vec::new();
        let written = VarFormatter.format_entry(&mut out, entry).unwrap();
        (written, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_assignment_line() {
        let function = FunctionDescriptor::new("hello", "nodejs");
        let entry = ReportEntry::new(
            &function,
            Ok(RemoteFunctionState::new("arn:aws:lambda:us-east-1:1:function:demo_hello")),
        );

        assert_eq!(
            render(&entry),
            (
                true,
                "apex_function_hello=\"arn:aws:lambda:us-east-1:1:function:demo_hello\"\n"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_failed_lookup_is_silent() {
        let function = FunctionDescriptor::new("hello", "nodejs");
        let entry = ReportEntry::new(
            &function,
            Err(RemoteLookupError::NotFound {
                function_name: "hello".to_string(),
            }),
        );

        assert_eq!(render(&entry), (false, String::new()));
    }

    #[test]
    fn test_empty_identifier_is_skipped() {
        let function = FunctionDescriptor::new("hello", "nodejs");
        let entry = ReportEntry::new(&function, Ok(RemoteFunctionState::new("")));

        assert_eq!(render(&entry), (false, String::new()));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote(""), "\"\"");
        assert_eq!(quote("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(quote("tab\there"), "\"tab\\there\"");
        assert_eq!(quote("bell\u{7}"), "\"bell\\x07\"");
        assert_eq!(quote("ünïcode"), "\"ünïcode\"");
    }
}
