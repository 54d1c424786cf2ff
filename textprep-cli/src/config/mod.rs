//! Pipeline options files and service wiring
//!
//! Options are read from TOML, or from JSON when the file has a `.json`
//! extension. Unknown keys are rejected.

use anyhow::{Context, Result};
use std::path::Path;
use textprep_core::language::LexiconLemmatizer;
use textprep_core::{Collaborators, PipelineOptions};

use crate::error::CliError;

/// Format of an options file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    /// `.toml` and anything unrecognized
    Toml,
    /// `.json`
    Json,
}

impl OptionsFormat {
    /// Detect the format of `path`
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OptionsFormat::Json,
            _ => OptionsFormat::Toml,
        }
    }
}

/// Load pipeline options from `path`
pub fn load_options(path: &Path) -> Result<PipelineOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file: {}", path.display()))?;

    let parsed = match OptionsFormat::detect(path) {
        OptionsFormat::Toml => PipelineOptions::from_toml_str(&source),
        OptionsFormat::Json => PipelineOptions::from_json_str(&source),
    };

    let options = parsed.map_err(|e| CliError::ConfigError(e.to_string()))?;
    log::debug!("Loaded options from {}: {:?}", path.display(), options);
    Ok(options)
}

/// Built-in English services, optionally overridden from files
///
/// A dictionary file is the only way to enable spell checking from the CLI.
pub fn load_collaborators(
    dictionary: Option<&Path>,
    lemma_table: Option<&Path>,
) -> Result<Collaborators> {
    let mut collaborators =
        Collaborators::english().context("Failed to load built-in English resources")?;

    if let Some(path) = lemma_table {
        collaborators = collaborators.with_lemmatizer(LexiconLemmatizer::from_file(path)?);
        log::info!("Using lemma table {}", path.display());
    }
    if let Some(path) = dictionary {
        collaborators = collaborators.with_dictionary_file(path)?;
        log::info!("Using spelling dictionary {}", path.display());
    }

    Ok(collaborators)
}
