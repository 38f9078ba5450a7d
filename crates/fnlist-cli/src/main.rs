//! fnlist CLI - Command-line utility for listing deployed serverless
//! functions.

mod cli;
mod commands;
mod error;
mod logging;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init(cli.verbose);

    match &cli.command {
        cli::Commands::List(args) => commands::list::execute(&cli, args),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}
