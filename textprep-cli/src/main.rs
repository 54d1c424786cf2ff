//! textprep command-line entry point

use anyhow::Result;
use clap::Parser;
use textprep_cli::commands::Commands;

/// Configurable text normalization
#[derive(Debug, Parser)]
#[command(name = "textprep", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
