//! Step executor

use super::{steps, Pipeline, Stage};
use crate::error::{PipelineError, Result, ServiceError};

impl Pipeline {
    /// Apply every enabled step to `text` in the fixed order
    ///
    /// Stopword removal, spell correction and stemming tokenize on single
    /// spaces; they expect whitespace normalization (and, for punctuation
    /// adjacent words, punctuation removal) to have run first. If any
    /// service fails the whole call fails and no partial text is returned.
    pub fn transform(&self, text: &str) -> Result<String> {
        let mut current = text.to_string();
        for stage in &self.stages {
            current = apply(stage, &current).map_err(|source| PipelineError::ExternalService {
                step: stage.step(),
                source,
            })?;
            log::trace!("{} -> {:?}", stage.step(), current);
        }
        Ok(current)
    }
}

fn apply(stage: &Stage, text: &str) -> std::result::Result<String, ServiceError> {
    match stage {
        Stage::Whitespace(pattern) => Ok(steps::normalize_whitespace(pattern, text)),
        Stage::Lowercase => Ok(text.to_lowercase()),
        Stage::Punctuation(chars) => Ok(steps::remove_chars(text, chars)),
        Stage::Stopwords(words) => Ok(steps::remove_stopwords(text, words)),
        Stage::Numbers(pattern) => Ok(steps::remove_matches(pattern, text)),
        Stage::Spelling(checker) => steps::map_tokens(text, |token| checker.correct(token)),
        Stage::Lemmatize(lemmatizer) => lemmatizer.lemmatize(text),
        Stage::Stem(stemmer) => steps::map_tokens(text, |token| stemmer.stem(token)),
    }
}
