//! Lexicon-based lemmatizer

use std::path::Path;

use crate::error::{Result, ServiceError};
use crate::language::config::{LanguageResources, LemmaTable};
use crate::language::loader;
use crate::language::stemmer::rewrite_suffix;
use crate::services::Lemmatizer;

/// Lemmatizer backed by an irregular-form table and inflection rules
///
/// Tokenizes on whitespace, looks each lowercased word up in the
/// irregular table, then falls back to the inflection rules. Words that
/// match neither are returned untouched.
#[derive(Debug, Clone)]
pub struct LexiconLemmatizer {
    table: LemmaTable,
}

impl LexiconLemmatizer {
    /// Lemmatizer with the embedded English table
    pub fn english() -> Result<Self> {
        Ok(Self::from_resources(&loader::english()?))
    }

    /// Build from loaded language resources
    pub fn from_resources(resources: &LanguageResources) -> Self {
        Self::from_table(resources.lemmas.clone())
    }

    /// Build from a lemma table
    pub fn from_table(table: LemmaTable) -> Self {
        Self { table }
    }

    /// Load a lemma table from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_table(loader::lemma_table_from_file(path)?))
    }

    fn lemma(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some(lemma) = self.table.irregular.get(&lower) {
            return lemma.clone();
        }
        rewrite_suffix(&lower, &self.table.rules, self.table.min_stem_length)
            .unwrap_or_else(|| word.to_string())
    }
}

impl Lemmatizer for LexiconLemmatizer {
    fn lemmatize(&self, text: &str) -> std::result::Result<String, ServiceError> {
        Ok(text
            .split_whitespace()
            .map(|word| self.lemma(word))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> LexiconLemmatizer {
        LexiconLemmatizer::english().unwrap()
    }

    #[test]
    fn test_irregular_forms() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("mice went").unwrap(), "mouse go");
        assert_eq!(l.lemmatize("Was").unwrap(), "be");
    }

    #[test]
    fn test_regular_inflections() {
        let l = lemmatizer();
        assert_eq!(
            l.lemmatize("foxes jumped over dogs").unwrap(),
            "fox jump over dog"
        );
        assert_eq!(l.lemmatize("studies").unwrap(), "study");
    }

    #[test]
    fn test_unknown_words_keep_case() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("The lazy Dog").unwrap(), "The lazy Dog");
    }

    #[test]
    fn test_tokens_rejoined_with_single_spaces() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("  cats \t were  ").unwrap(), "cat be");
    }

    #[test]
    fn test_custom_table() {
        let mut table = LemmaTable::default();
        table.irregular.insert("oxen".into(), "ox".into());
        let l = LexiconLemmatizer::from_table(table);
        assert_eq!(l.lemmatize("oxen cats").unwrap(), "ox cats");
    }
}
