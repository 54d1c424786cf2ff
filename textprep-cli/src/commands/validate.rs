//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use textprep_core::Pipeline;

use crate::config::{load_collaborators, load_options};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the pipeline options file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,

    /// Spelling dictionary, needed when the options enable spellcheck
    #[arg(long, value_name = "FILE", env = "TEXTPREP_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Lemma table (TOML) replacing the built-in English one
    #[arg(long, value_name = "FILE")]
    pub lemma_table: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating pipeline options: {}", self.config.display());

        match self.build() {
            Ok(pipeline) => {
                println!("✓ Configuration is valid!");
                let steps = pipeline.steps();
                if steps.is_empty() {
                    println!("  No steps enabled; text passes through unchanged");
                }
                for (i, step) in steps.iter().enumerate() {
                    println!("  {}. {}", i + 1, step);
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }

    /// Resolve the options file into a pipeline
    fn build(&self) -> Result<Pipeline> {
        let options = load_options(&self.config)?;
        let collaborators =
            load_collaborators(self.dictionary.as_deref(), self.lemma_table.as_deref())?;
        Ok(Pipeline::from_options(options, collaborators)?)
    }
}
