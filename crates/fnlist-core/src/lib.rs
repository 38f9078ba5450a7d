//! Listing and reporting engine for deployed serverless functions.
//!
//! `fnlist-core` loads the functions of a project, looks up each one's
//! remote state, and renders either a human-readable listing or
//! `apex_function_<name>="<arn>"` variable assignments for infrastructure
//! tooling. A failed remote lookup degrades or omits that one function; it
//! never aborts the report.
//!
//! # Examples
//!
//! ```no_run
//! use fnlist_core::FunctionSource;
//! use fnlist_core::OutputMode;
//! use fnlist_core::ProjectSource;
//! use fnlist_core::Reporter;
//! use fnlist_core::SnapshotProvider;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let functions = ProjectSource::new("./my-project").load()?;
//! let provider = SnapshotProvider::from_file("./my-project/remote-state.json")?;
//!
//! let mut stdout = std::io::stdout().lock();
//! Reporter::new(&provider).run(&functions, OutputMode::Text, &mut stdout)?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod function;
pub mod output;
pub mod remote;
pub mod report;
pub mod source;

// Re-export main API types
pub use error::LoadError;
pub use error::RemoteLookupError;
pub use error::ReportError;
pub use error::Result;
pub use function::FunctionDescriptor;
pub use remote::RemoteConfigProvider;
pub use remote::RemoteFunctionState;
pub use remote::SnapshotProvider;
pub use remote::StaticProvider;
pub use report::OutputMode;
pub use report::ReportEntry;
pub use report::ReportSummary;
pub use report::Reporter;
pub use source::FunctionSource;
pub use source::ProjectSource;
pub use source::StaticSource;
