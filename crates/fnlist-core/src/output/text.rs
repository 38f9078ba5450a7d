//! Human-readable output.

use std::io;
use std::io::Write;

use console::Style;

use super::formatter::ReportFormatter;
use crate::ReportEntry;

/// Renders a detail block per function.
///
/// ```text
///
///   hello
///     description: says hi
///     runtime: nodejs
///     memory: 128mb
///     timeout: 3s
///     role: arn:aws:iam::123456789012:role/hello
///     handler: index.handler
///     current version: 3
///
/// ```
///
/// The description line appears only when the description is non-empty and
/// the version line only when the lookup succeeded with a published version.
/// Every block ends with a blank line.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    use_colors: bool,
    name_style: Style,
}

impl TextFormatter {
    /// Creates a formatter, highlighting function names when `use_colors` is
    /// set.
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            name_style: Style::new().blue().force_styling(true),
        }
    }

    fn write_name(&self, out: &mut dyn Write, name: &str) -> io::Result<()> {
        if self.use_colors {
            writeln!(out, "  {}", self.name_style.apply_to(name))
        } else {
            writeln!(out, "  {name}")
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn begin(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)
    }

    fn format_entry(&self, out: &mut dyn Write, entry: &ReportEntry<'_>) -> io::Result<bool> {
        let function = entry.descriptor;

        self.write_name(out, &function.name)?;
        if !function.description.is_empty() {
            writeln!(out, "    description: {}", function.description)?;
        }
        writeln!(out, "    runtime: {}", function.runtime)?;
        writeln!(out, "    memory: {}mb", function.memory)?;
        writeln!(out, "    timeout: {}s", function.timeout)?;
        writeln!(out, "    role: {}", function.role)?;
        writeln!(out, "    handler: {}", function.handler)?;

        if let Ok(state) = &entry.remote
            && let Some(version) = &state.published_version
        {
            writeln!(out, "    current version: {version}")?;
        }

        writeln!(out)?;
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::FunctionDescriptor;
    use crate::RemoteFunctionState;
    use crate::RemoteLookupError;

    fn hello() -> FunctionDescriptor {
        FunctionDescriptor::new("hello", "nodejs")
            .with_timeout(3)
            .with_role("r1")
            .with_handler("index.handler")
    }

    fn render(formatter: &TextFormatter, entry: &ReportEntry<'_>) -> String {
        let mut out = Vec::new();
        assert!(formatter.format_entry(&mut out, entry).unwrap());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_block_with_version() {
        let function = hello();
        let entry = ReportEntry::new(
            &function,
            Ok(RemoteFunctionState::new("arn").with_version("3")),
        );

        assert_eq!(
            render(&TextFormatter::new(false), &entry),
            "  hello\n\
             \x20   runtime: nodejs\n\
             \x20   memory: 128mb\n\
             \x20   timeout: 3s\n\
             \x20   role: r1\n\
             \x20   handler: index.handler\n\
             \x20   current version: 3\n\
             \n"
        );
    }

    #[test]
    fn test_block_with_description() {
        let function = hello().with_description("says hi");
        let entry = ReportEntry::new(&function, Ok(RemoteFunctionState::new("arn")));

        let text = render(&TextFormatter::new(false), &entry);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "  hello");
        assert_eq!(lines[1], "    description: says hi");
        assert_eq!(lines[2], "    runtime: nodejs");
        assert!(!text.contains("current version"));
    }

    #[test]
    fn test_block_after_failed_lookup() {
        let function = hello();
        let entry = ReportEntry::new(
            &function,
            Err(RemoteLookupError::Provider("timed out".to_string())),
        );

        let text = render(&TextFormatter::new(false), &entry);
        assert!(text.contains("    handler: index.handler\n"));
        assert!(!text.contains("current version"));
        assert!(text.ends_with("index.handler\n\n"));
    }

    #[test]
    fn test_colored_name() {
        let function = hello();
        let entry = ReportEntry::new(&function, Ok(RemoteFunctionState::new("arn")));

        let text = render(&TextFormatter::new(true), &entry);
        assert!(text.starts_with("  \u{1b}[34mhello\u{1b}[0m\n"));
    }

    #[test]
    fn test_begin_writes_blank_line() {
        let mut out = Vec::new();
        TextFormatter::new(false).begin(&mut out).unwrap();
        assert_eq!(out, b"\n");
    }
}
