//! Loosely-typed construction options
//!
//! This is the declarative surface of the pipeline: every field mirrors one
//! user-facing option and accepts the same shapes a config file would use
//! (`punctuation = true`, `punctuation = ",;"`, `punctuation = [",", "f"]`).
//! Nothing here is interpreted; see [`crate::config`] for resolution.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Stopword option: a flag for the default list, or a custom word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopwordOption {
    /// `false` disables removal, `true` uses the provider's default set
    Enabled(bool),
    /// Custom words, optionally merged with the default set
    Custom(Vec<String>),
}

impl Default for StopwordOption {
    fn default() -> Self {
        StopwordOption::Enabled(false)
    }
}

/// Punctuation option: a flag for the default set, a string of characters,
/// or a list whose entries are flattened into characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PunctuationOption {
    /// `false` disables removal, `true` uses the default punctuation set
    Enabled(bool),
    /// Every character of the string is removed
    Chars(String),
    /// Every character of every entry is removed
    List(Vec<String>),
}

impl Default for PunctuationOption {
    fn default() -> Self {
        PunctuationOption::Enabled(false)
    }
}

/// Raw pipeline options as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineOptions {
    /// Correct each word with the spell checker
    pub spellcheck: bool,
    /// Extra words the spell checker must accept as correct
    pub known_words: Option<Vec<String>>,
    /// Replace words by their lemma (takes priority over `stem`)
    pub lemmatize: bool,
    /// Replace words by their stem
    pub stem: bool,
    /// Stopword removal
    pub stopwords: StopwordOption,
    /// Merge custom stopwords with the default set instead of replacing it
    pub append_stopwords: bool,
    /// Lowercase the whole text
    pub lower: bool,
    /// Punctuation removal
    pub punctuation: PunctuationOption,
    /// Merge custom punctuation with the default set instead of replacing it
    pub append_punctuation: bool,
    /// Collapse runs of whitespace into a single space
    pub whitespace: bool,
    /// Strip runs of decimal digits
    pub numbers: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            spellcheck: false,
            known_words: None,
            lemmatize: false,
            stem: false,
            stopwords: StopwordOption::default(),
            append_stopwords: true,
            lower: false,
            punctuation: PunctuationOption::default(),
            append_punctuation: true,
            whitespace: true,
            numbers: false,
        }
    }
}

impl PipelineOptions {
    /// Options with every step disabled, including whitespace normalization
    pub fn disabled() -> Self {
        Self {
            whitespace: false,
            ..Self::default()
        }
    }

    /// Parse options from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse options from a JSON document
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}
