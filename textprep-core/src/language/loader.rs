//! Language resource loader
//!
//! Parses the embedded English resources or a resource file from disk.
//! Nothing is cached globally: each owner parses once and keeps the result.

use std::path::Path;

use crate::error::{PipelineError, Result};
use crate::language::config::{LanguageResources, LemmaTable};

const ENGLISH: &str = include_str!("../../configs/english.toml");

/// Load the embedded English resources
pub fn english() -> Result<LanguageResources> {
    parse_resources("english", ENGLISH)
}

/// Load language resources from a TOML file
pub fn from_file(path: impl AsRef<Path>) -> Result<LanguageResources> {
    let path = path.as_ref();
    let source = read(path)?;
    parse_resources(&path.display().to_string(), &source)
}

/// Load a lemma table from a TOML file
pub fn lemma_table_from_file(path: impl AsRef<Path>) -> Result<LemmaTable> {
    let path = path.as_ref();
    let source = read(path)?;
    let table: LemmaTable = toml::from_str(&source).map_err(|e| {
        PipelineError::unavailable(path.display().to_string(), format!("parse error: {e}"))
    })?;
    table
        .validate()
        .map_err(|e| PipelineError::unavailable(path.display().to_string(), e))?;
    Ok(table)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| PipelineError::unavailable(path.display().to_string(), e.to_string()))
}

fn parse_resources(name: &str, source: &str) -> Result<LanguageResources> {
    let resources: LanguageResources = toml::from_str(source)
        .map_err(|e| PipelineError::unavailable(name, format!("Failed to parse config: {e}")))?;
    resources
        .validate()
        .map_err(|e| PipelineError::unavailable(name, e))?;
    log::debug!(
        "loaded {} resources: {} stopwords, {} stemmer rules, {} lemmas",
        resources.metadata.name,
        resources.stopwords.words.len(),
        resources.stemmer.rules.len(),
        resources.lemmas.irregular.len()
    );
    Ok(resources)
}
