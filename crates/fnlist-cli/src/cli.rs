//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use fnlist_core::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fnlist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory
    #[arg(short = 'C', long, global = true, value_name = "DIR", default_value = ".")]
    pub chdir: PathBuf,

    /// Project environment (reads project.<ENV>.json)
    #[arg(short, long, global = true, value_name = "ENV")]
    pub env: Option<String>,

    /// Enable verbose output (diagnostics on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Output functions list
    #[command(after_help = "Examples:\n  \
        List all functions\n  \
        $ fnlist list\n\n  \
        Output list as Terraform variables (.tfvars)\n  \
        $ fnlist list --tfvars")]
    List(ListArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Functions to list (default: all)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Output as Terraform variables
    #[arg(long)]
    pub tfvars: bool,

    /// Remote state snapshot (default: <DIR>/remote-state.json)
    #[arg(long, value_name = "FILE")]
    pub remote_state: Option<PathBuf>,
}

impl ListArgs {
    /// Output mode selected by the flags.
    pub const fn mode(&self) -> OutputMode {
        if self.tfvars {
            OutputMode::Vars
        } else {
            OutputMode::Text
        }
    }
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
