//! Formatter trait shared by the output formats.

use std::io;
use std::io::Write;

use crate::ReportEntry;

/// Renders report entries to an output sink.
///
/// Formatters hold no state between calls: the bytes written for an entry
/// depend only on that entry.
pub trait ReportFormatter {
    /// Writes anything that precedes the first entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be written.
    fn begin(&self, out: &mut dyn Write) -> io::Result<()> {
        let _ = out;
        Ok(())
    }

    /// Writes one entry.
    ///
    /// Returns `true` if anything was written for the entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be written.
    fn format_entry(&self, out: &mut dyn Write, entry: &ReportEntry<'_>) -> io::Result<bool>;
}
