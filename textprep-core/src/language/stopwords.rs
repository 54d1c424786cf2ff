//! Stopword list provider

use std::collections::HashSet;

use crate::error::{Result, ServiceError};
use crate::language::config::LanguageResources;
use crate::language::loader;
use crate::services::StopwordProvider;

/// Stopword provider serving a list loaded from language resources
#[derive(Debug, Clone)]
pub struct EmbeddedStopwords {
    words: HashSet<String>,
}

impl EmbeddedStopwords {
    /// The embedded English stopword list
    pub fn english() -> Result<Self> {
        Ok(Self::from_resources(&loader::english()?))
    }

    /// Build from loaded language resources
    pub fn from_resources(resources: &LanguageResources) -> Self {
        Self::from_words(resources.stopwords.words.iter().cloned())
    }

    /// Build from an arbitrary word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordProvider for EmbeddedStopwords {
    fn default_stopwords(&self) -> std::result::Result<HashSet<String>, ServiceError> {
        if self.words.is_empty() {
            return Err(ServiceError::new("stopwords", "stopword list is empty"));
        }
        Ok(self.words.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list() {
        let provider = EmbeddedStopwords::english().unwrap();
        let words = provider.default_stopwords().unwrap();
        assert!(words.contains("the"));
        assert!(words.contains("over"));
        assert!(!words.contains("fox"));
        assert_eq!(words.len(), provider.len());
    }

    #[test]
    fn test_empty_list_fails() {
        let provider = EmbeddedStopwords::from_words(Vec::<String>::new());
        assert!(provider.is_empty());
        assert!(provider.default_stopwords().is_err());
    }
}
