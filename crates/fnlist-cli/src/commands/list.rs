//! List command implementation

use crate::cli::Cli;
use crate::cli::ListArgs;
use crate::error::add_load_context;
use anyhow::Context;
use anyhow::Result;
use fnlist_core::FunctionSource;
use fnlist_core::ProjectSource;
use fnlist_core::Reporter;
use fnlist_core::SnapshotProvider;
use std::io;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;
use tracing::warn;

/// Snapshot read when `--remote-state` is not given.
const DEFAULT_REMOTE_STATE: &str = "remote-state.json";

pub fn execute(cli: &Cli, args: &ListArgs) -> Result<()> {
    let mut source = ProjectSource::new(&cli.chdir).with_names(args.names.iter().cloned());
    if let Some(env) = &cli.env {
        source = source.with_env(env);
    }

    let functions = add_load_context(source.load(), source.root())?;
    let provider = load_provider(&cli.chdir, args.remote_state.as_deref())?;

    let mut out = BufWriter::new(io::stdout().lock());
    let summary = Reporter::new(&provider)
        .with_colors(console::colors_enabled())
        .run(&functions, args.mode(), &mut out)
        .context("failed to write report")?;

    if summary.failed() > 0 {
        debug!(
            failed = summary.failed(),
            total = summary.functions,
            "some functions could not be resolved remotely"
        );
    }

    Ok(())
}

fn load_provider(project: &Path, remote_state: Option<&Path>) -> Result<SnapshotProvider> {
    if let Some(path) = remote_state {
        return SnapshotProvider::from_file(path)
            .with_context(|| format!("failed to load remote state '{}'", path.display()));
    }

    let path = project.join(DEFAULT_REMOTE_STATE);
    if path.is_file() {
        SnapshotProvider::from_file(&path)
            .with_context(|| format!("failed to load remote state '{}'", path.display()))
    } else {
        warn!(
            path = %path.display(),
            "remote state not found, versions and ARNs are unavailable"
        );
        Ok(SnapshotProvider::empty())
    }
}
