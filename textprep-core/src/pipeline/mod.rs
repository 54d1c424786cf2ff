//! The normalization pipeline
//!
//! A [`Pipeline`] is configured once and then applied to single values
//! ([`Pipeline::transform`]) or ordered collections
//! ([`Pipeline::transform_series`]). Steps always run in the order given by
//! [`Step::ALL`], whatever order the options were supplied in.

mod batch;
mod builder;
mod executor;
pub(crate) mod steps;

pub use builder::PipelineBuilder;

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::options::PipelineOptions;
use crate::services::{Collaborators, Lemmatizer, SpellChecker, Stemmer};

/// One normalization step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Collapse whitespace runs into a single space
    WhitespaceNormalization,
    /// Lowercase the text
    Lowercase,
    /// Strip characters of the punctuation set
    PunctuationRemoval,
    /// Drop stopword tokens
    StopwordRemoval,
    /// Strip runs of decimal digits
    NumberRemoval,
    /// Replace tokens by their spelling correction
    SpellCorrection,
    /// Replace words by their lemma
    Lemmatization,
    /// Replace tokens by their stem
    Stemming,
}

impl Step {
    /// Every step in execution order
    pub const ALL: [Step; 8] = [
        Step::WhitespaceNormalization,
        Step::Lowercase,
        Step::PunctuationRemoval,
        Step::StopwordRemoval,
        Step::NumberRemoval,
        Step::SpellCorrection,
        Step::Lemmatization,
        Step::Stemming,
    ];

    /// Stable kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            Step::WhitespaceNormalization => "whitespace-normalization",
            Step::Lowercase => "lowercase",
            Step::PunctuationRemoval => "punctuation-removal",
            Step::StopwordRemoval => "stopword-removal",
            Step::NumberRemoval => "number-removal",
            Step::SpellCorrection => "spell-correction",
            Step::Lemmatization => "lemmatization",
            Step::Stemming => "stemming",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            Step::WhitespaceNormalization => "collapse runs of whitespace into one space",
            Step::Lowercase => "lowercase all characters",
            Step::PunctuationRemoval => "remove every character of the punctuation set",
            Step::StopwordRemoval => "drop space-separated tokens found in the stopword set",
            Step::NumberRemoval => "remove runs of decimal digits",
            Step::SpellCorrection => "replace each token by its spelling correction",
            Step::Lemmatization => "replace words by their lemma (skips stemming)",
            Step::Stemming => "replace each token by its stem",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A step bound to the resources it runs with
pub(crate) enum Stage {
    Whitespace(Regex),
    Lowercase,
    Punctuation(BTreeSet<char>),
    Stopwords(BTreeSet<String>),
    Numbers(Regex),
    Spelling(Box<dyn SpellChecker>),
    Lemmatize(Arc<dyn Lemmatizer>),
    Stem(Arc<dyn Stemmer>),
}

impl Stage {
    pub(crate) fn step(&self) -> Step {
        match self {
            Stage::Whitespace(_) => Step::WhitespaceNormalization,
            Stage::Lowercase => Step::Lowercase,
            Stage::Punctuation(_) => Step::PunctuationRemoval,
            Stage::Stopwords(_) => Step::StopwordRemoval,
            Stage::Numbers(_) => Step::NumberRemoval,
            Stage::Spelling(_) => Step::SpellCorrection,
            Stage::Lemmatize(_) => Step::Lemmatization,
            Stage::Stem(_) => Step::Stemming,
        }
    }
}

/// Configured text-normalization pipeline
///
/// Immutable after construction; `transform` only reads, so a pipeline can
/// be shared between threads.
pub struct Pipeline {
    config: PipelineConfig,
    stages: Vec<Stage>,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("steps", &self.steps())
            .finish()
    }
}

impl Pipeline {
    /// Create a pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Resolve options and acquire the services the enabled steps need
    pub fn from_options(options: PipelineOptions, collaborators: Collaborators) -> Result<Self> {
        let config = PipelineConfig::resolve(&options, collaborators.stopwords.as_deref())?;
        Self::with_config(config, collaborators)
    }

    /// Build from an already resolved configuration
    pub fn with_config(config: PipelineConfig, collaborators: Collaborators) -> Result<Self> {
        let Collaborators {
            lemmatizer,
            stemmer,
            mut spellchecker,
            ..
        } = collaborators;

        let mut stages = Vec::new();
        for step in config.steps() {
            let stage = match step {
                Step::WhitespaceNormalization => Stage::Whitespace(compile(r"\s+")?),
                Step::Lowercase => Stage::Lowercase,
                Step::PunctuationRemoval => {
                    Stage::Punctuation(config.punctuation_policy.clone().unwrap_or_default())
                }
                Step::StopwordRemoval => {
                    Stage::Stopwords(config.stopword_policy.clone().unwrap_or_default())
                }
                Step::NumberRemoval => Stage::Numbers(compile(r"\d+")?),
                Step::SpellCorrection => {
                    let mut checker = spellchecker.take().ok_or_else(|| {
                        PipelineError::unavailable("spellchecker", "no spell checker configured")
                    })?;
                    let words = config.known_words.clone().unwrap_or_default();
                    checker
                        .load_vocabulary(&words)
                        .map_err(|e| PipelineError::unavailable("spellchecker", e.to_string()))?;
                    log::debug!("loaded {} known words into spell checker", words.len());
                    Stage::Spelling(checker)
                }
                Step::Lemmatization => Stage::Lemmatize(lemmatizer.clone().ok_or_else(|| {
                    PipelineError::unavailable("lemmatizer", "no lemmatizer configured")
                })?),
                Step::Stemming => Stage::Stem(stemmer.clone().ok_or_else(|| {
                    PipelineError::unavailable("stemmer", "no stemmer configured")
                })?),
            };
            stages.push(stage);
        }

        log::debug!(
            "pipeline ready: {}",
            stages
                .iter()
                .map(|s| s.step().name())
                .collect::<Vec<_>>()
                .join(" -> ")
        );

        Ok(Self { config, stages })
    }

    /// The resolved configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Enabled steps in execution order
    pub fn steps(&self) -> Vec<Step> {
        self.stages.iter().map(Stage::step).collect()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| PipelineError::Configuration(format!("invalid pattern {pattern}: {e}")))
}
