//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

const TEMPLATE: &str = r#"# textprep pipeline options
#
# Steps always run in this order:
#   whitespace, lower, punctuation, stopwords, numbers,
#   spellcheck, lemmatize (or stem)

# Collapse every run of whitespace into a single space
whitespace = true

# Lowercase the whole text
lower = false

# Punctuation removal:
#   false          disabled
#   true           default ASCII punctuation set
#   ",;"           these characters
#   [",", "f"]     characters of every entry
punctuation = false

# Merge custom punctuation with the default set
append_punctuation = true

# Stopword removal:
#   false              disabled
#   true               built-in English list
#   ["fox", "quick"]   custom words (case-insensitive)
stopwords = false

# Merge custom stopwords with the built-in list
append_stopwords = true

# Remove runs of digits
numbers = false

# Correct spelling; needs --dictionary on the command line
spellcheck = false

# Words the spell checker must accept as correct
# known_words = ["textprep"]

# Replace words by their lemma; takes priority over stem
lemmatize = false

# Replace words by their stem
stem = false
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating pipeline options template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to enable the steps you need");
        println!("2. Validate your configuration:");
        println!("   textprep validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!("   textprep process -i input.txt -c {}", self.output.display());

        Ok(())
    }
}
