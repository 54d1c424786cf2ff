//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use textprep_core::Step;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize every line of the input files
    Process(process::ProcessArgs),

    /// Check a pipeline options file and show the resolved steps
    Validate(validate::ValidateArgs),

    /// Write a commented pipeline options template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List pipeline steps in execution order
    Steps,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Text printed for this listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Steps => Step::ALL
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {:<24} {}\n", i + 1, step.name(), step.description()))
                .collect(),
            ListCommands::Formats => "text  one transformed line per input line\n\
                 json  array of {source, line, text} records\n"
                .to_string(),
        }
    }
}
