//! Report output formats.
//!
//! [`TextFormatter`] renders a detail block per function for people;
//! [`VarFormatter`] renders `name="value"` assignments for infrastructure
//! tooling. The reporter picks one through
//! [`OutputMode`](crate::OutputMode).

mod formatter;
mod text;
mod vars;

pub use formatter::ReportFormatter;
pub use text::TextFormatter;
pub use vars::VAR_PREFIX;
pub use vars::VarFormatter;
pub use vars::quote;
