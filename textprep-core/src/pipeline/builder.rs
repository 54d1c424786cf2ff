//! Fluent pipeline builder

use super::Pipeline;
use crate::error::Result;
use crate::options::{PipelineOptions, PunctuationOption, StopwordOption};
use crate::services::{Collaborators, Lemmatizer, SpellChecker, StopwordProvider, Stemmer};

/// Builder for [`Pipeline`]
///
/// Setters can be called in any order; nothing is resolved until
/// [`PipelineBuilder::build`].
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    options: PipelineOptions,
    collaborators: Collaborators,
}

impl PipelineBuilder {
    /// Create a builder with default options and no collaborators
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options at once
    pub fn options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace all collaborators at once
    pub fn collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    /// Enable spell correction
    pub fn spellcheck(mut self, enabled: bool) -> Self {
        self.options.spellcheck = enabled;
        self
    }

    /// Words the spell checker must accept
    pub fn known_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.known_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Enable lemmatization
    pub fn lemmatize(mut self, enabled: bool) -> Self {
        self.options.lemmatize = enabled;
        self
    }

    /// Enable stemming
    pub fn stem(mut self, enabled: bool) -> Self {
        self.options.stem = enabled;
        self
    }

    /// Remove the default stopword set
    pub fn stopwords(mut self, enabled: bool) -> Self {
        self.options.stopwords = StopwordOption::Enabled(enabled);
        self
    }

    /// Remove a custom stopword list
    pub fn custom_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.stopwords = StopwordOption::Custom(words.into_iter().map(Into::into).collect());
        self
    }

    /// Merge custom stopwords with the default set
    pub fn append_stopwords(mut self, append: bool) -> Self {
        self.options.append_stopwords = append;
        self
    }

    /// Lowercase the text
    pub fn lower(mut self, enabled: bool) -> Self {
        self.options.lower = enabled;
        self
    }

    /// Remove the default punctuation set
    pub fn punctuation(mut self, enabled: bool) -> Self {
        self.options.punctuation = PunctuationOption::Enabled(enabled);
        self
    }

    /// Remove every character of `chars`
    pub fn punctuation_chars(mut self, chars: impl Into<String>) -> Self {
        self.options.punctuation = PunctuationOption::Chars(chars.into());
        self
    }

    /// Merge custom punctuation with the default set
    pub fn append_punctuation(mut self, append: bool) -> Self {
        self.options.append_punctuation = append;
        self
    }

    /// Collapse whitespace runs
    pub fn whitespace(mut self, enabled: bool) -> Self {
        self.options.whitespace = enabled;
        self
    }

    /// Strip digit runs
    pub fn numbers(mut self, enabled: bool) -> Self {
        self.options.numbers = enabled;
        self
    }

    /// Set the stopword provider
    pub fn stopword_provider(mut self, provider: impl StopwordProvider + 'static) -> Self {
        self.collaborators = self.collaborators.with_stopwords(provider);
        self
    }

    /// Set the lemmatizer
    pub fn lemmatizer(mut self, lemmatizer: impl Lemmatizer + 'static) -> Self {
        self.collaborators = self.collaborators.with_lemmatizer(lemmatizer);
        self
    }

    /// Set the stemmer
    pub fn stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.collaborators = self.collaborators.with_stemmer(stemmer);
        self
    }

    /// Set the spell checker
    pub fn spellchecker(mut self, checker: impl SpellChecker + 'static) -> Self {
        self.collaborators = self.collaborators.with_spellchecker(checker);
        self
    }

    /// Resolve the options and build the pipeline
    pub fn build(self) -> Result<Pipeline> {
        Pipeline::from_options(self.options, self.collaborators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::EmbeddedStopwords;
    use crate::Step;

    #[test]
    fn test_builder_defaults() {
        let pipeline = PipelineBuilder::new().build().unwrap();
        assert_eq!(pipeline.steps(), vec![Step::WhitespaceNormalization]);
    }

    #[test]
    fn test_setter_order_is_irrelevant() {
        let a = Pipeline::builder()
            .numbers(true)
            .lower(true)
            .punctuation_chars("!?")
            .append_punctuation(false)
            .build()
            .unwrap();
        let b = Pipeline::builder()
            .append_punctuation(false)
            .punctuation_chars("?!")
            .lower(true)
            .numbers(true)
            .build()
            .unwrap();
        assert_eq!(a.config(), b.config());
    }

    #[test]
    fn test_builder_with_provider() {
        let pipeline = Pipeline::builder()
            .stopwords(true)
            .stopword_provider(EmbeddedStopwords::english().unwrap())
            .build()
            .unwrap();
        assert!(pipeline
            .config()
            .stopword_policy()
            .is_some_and(|set| set.contains("the")));
    }
}
