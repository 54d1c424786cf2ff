//! Configuration structures for language resources
//!
//! This module defines the TOML schema of the embedded resource file and of
//! user-supplied lemma tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root language resource configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageResources {
    pub metadata: Metadata,
    pub stopwords: Stopwords,
    pub stemmer: StemmerRules,
    #[serde(default)]
    pub lemmas: LemmaTable,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Default stopword list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stopwords {
    pub words: Vec<String>,
}

/// Ordered suffix rules for the stemmer; the first matching rule wins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StemmerRules {
    #[serde(default = "default_min_stem")]
    pub min_stem_length: usize,
    pub rules: Vec<SuffixRule>,
}

/// Replace `suffix` by `replacement`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    #[serde(default)]
    pub replacement: String,
}

/// Lemma lookup table plus fallback inflection rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmaTable {
    #[serde(default = "default_min_stem")]
    pub min_stem_length: usize,
    /// Irregular forms: surface form -> lemma
    #[serde(default)]
    pub irregular: HashMap<String, String>,
    /// Regular inflection rules, tried in order after the lookup
    #[serde(default)]
    pub rules: Vec<SuffixRule>,
}

impl Default for LemmaTable {
    fn default() -> Self {
        Self {
            min_stem_length: default_min_stem(),
            irregular: HashMap::new(),
            rules: Vec::new(),
        }
    }
}

fn default_min_stem() -> usize {
    3
}

impl LanguageResources {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if self.stopwords.words.is_empty() {
            return Err("No stopwords defined".to_string());
        }

        if let Some(rule) = self.stemmer.rules.iter().find(|r| r.suffix.is_empty()) {
            return Err(format!("Stemmer rule with empty suffix: {rule:?}"));
        }

        self.lemmas.validate()
    }
}

impl LemmaTable {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if let Some(rule) = self.rules.iter().find(|r| r.suffix.is_empty()) {
            return Err(format!("Lemma rule with empty suffix: {rule:?}"));
        }
        if let Some((form, _)) = self.irregular.iter().find(|(_, lemma)| lemma.is_empty()) {
            return Err(format!("Empty lemma for {form:?}"));
        }
        Ok(())
    }
}
