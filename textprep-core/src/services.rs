//! Linguistic service interfaces
//!
//! The pipeline never does linguistic work itself. It talks to these four
//! traits; implementations must be thread-safe so that one pipeline can be
//! shared by concurrent readers.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, ServiceError};
use crate::language::{
    loader, DictionarySpellChecker, EmbeddedStopwords, LexiconLemmatizer, SuffixStemmer,
};

/// Source of the default stopword set
pub trait StopwordProvider: Send + Sync {
    /// The full default stopword set
    fn default_stopwords(&self) -> std::result::Result<HashSet<String>, ServiceError>;
}

/// Whole-text lemmatizer; tokenization is internal to the service
pub trait Lemmatizer: Send + Sync {
    /// Replace each word of `text` by its lemma
    fn lemmatize(&self, text: &str) -> std::result::Result<String, ServiceError>;
}

/// Single-token stemmer
pub trait Stemmer: Send + Sync {
    /// Stem one token
    fn stem(&self, token: &str) -> std::result::Result<String, ServiceError>;
}

/// Dictionary-based spell checker
pub trait SpellChecker: Send + Sync {
    /// Add words to the accepted vocabulary
    ///
    /// Called once when the pipeline is built, with an empty set when no
    /// known words were given. An error here fails construction.
    fn load_vocabulary(&mut self, words: &BTreeSet<String>)
        -> std::result::Result<(), ServiceError>;

    /// Best correction for one token
    fn correct(&self, token: &str) -> std::result::Result<String, ServiceError>;
}

/// Service handles handed to the pipeline at construction
///
/// Only the services required by the chosen options need to be present.
#[derive(Default)]
pub struct Collaborators {
    pub(crate) stopwords: Option<Arc<dyn StopwordProvider>>,
    pub(crate) lemmatizer: Option<Arc<dyn Lemmatizer>>,
    pub(crate) stemmer: Option<Arc<dyn Stemmer>>,
    pub(crate) spellchecker: Option<Box<dyn SpellChecker>>,
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators")
            .field("stopwords", &self.stopwords.is_some())
            .field("lemmatizer", &self.lemmatizer.is_some())
            .field("stemmer", &self.stemmer.is_some())
            .field("spellchecker", &self.spellchecker.is_some())
            .finish()
    }
}

impl Collaborators {
    /// Empty set of collaborators
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English resources: stopwords, stemmer and lemmatizer
    ///
    /// No dictionary is embedded, so spell checking still needs
    /// [`Collaborators::with_spellchecker`].
    pub fn english() -> Result<Self> {
        let resources = loader::english()?;
        Ok(Self::new()
            .with_stopwords(EmbeddedStopwords::from_resources(&resources))
            .with_stemmer(SuffixStemmer::from_resources(&resources))
            .with_lemmatizer(LexiconLemmatizer::from_resources(&resources)))
    }

    /// Set the stopword provider
    pub fn with_stopwords(mut self, provider: impl StopwordProvider + 'static) -> Self {
        self.stopwords = Some(Arc::new(provider));
        self
    }

    /// Set the lemmatizer
    pub fn with_lemmatizer(mut self, lemmatizer: impl Lemmatizer + 'static) -> Self {
        self.lemmatizer = Some(Arc::new(lemmatizer));
        self
    }

    /// Set the stemmer
    pub fn with_stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = Some(Arc::new(stemmer));
        self
    }

    /// Set the spell checker
    pub fn with_spellchecker(mut self, checker: impl SpellChecker + 'static) -> Self {
        self.spellchecker = Some(Box::new(checker));
        self
    }

    /// Load a frequency dictionary from disk and use it as spell checker
    pub fn with_dictionary_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let checker = DictionarySpellChecker::from_file(path)?;
        Ok(self.with_spellchecker(checker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_collaborators() {
        let collaborators = Collaborators::english().unwrap();
        assert!(collaborators.stopwords.is_some());
        assert!(collaborators.stemmer.is_some());
        assert!(collaborators.lemmatizer.is_some());
        assert!(collaborators.spellchecker.is_none());
    }

    #[test]
    fn test_debug_hides_handles() {
        let debug = format!("{:?}", Collaborators::new());
        assert!(debug.contains("stopwords: false"));
        assert!(debug.contains("spellchecker: false"));
    }

    #[test]
    fn test_missing_dictionary_file() {
        let result = Collaborators::new().with_dictionary_file("/nonexistent/words.txt");
        assert!(matches!(
            result,
            Err(crate::PipelineError::ResourceUnavailable { .. })
        ));
    }
}
