//! Configuration resolver
//!
//! Turns [`PipelineOptions`] into a canonical, immutable [`PipelineConfig`].
//! Punctuation and stopword options are flattened and merged here, once, so
//! the executor only ever sees concrete sets.

use std::collections::BTreeSet;

use crate::error::{PipelineError, Result};
use crate::options::{PipelineOptions, PunctuationOption, StopwordOption};
use crate::pipeline::Step;
use crate::services::StopwordProvider;

/// Default punctuation characters (ASCII punctuation)
pub const DEFAULT_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// The default punctuation set
pub fn default_punctuation() -> BTreeSet<char> {
    DEFAULT_PUNCTUATION.chars().collect()
}

/// Resolved, immutable pipeline policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub(crate) spellcheck_enabled: bool,
    pub(crate) known_words: Option<BTreeSet<String>>,
    pub(crate) lemmatize_enabled: bool,
    pub(crate) stem_enabled: bool,
    pub(crate) stopword_policy: Option<BTreeSet<String>>,
    pub(crate) lowercase_enabled: bool,
    pub(crate) punctuation_policy: Option<BTreeSet<char>>,
    pub(crate) whitespace_normalize_enabled: bool,
    pub(crate) number_removal_enabled: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            spellcheck_enabled: false,
            known_words: None,
            lemmatize_enabled: false,
            stem_enabled: false,
            stopword_policy: None,
            lowercase_enabled: false,
            punctuation_policy: None,
            whitespace_normalize_enabled: true,
            number_removal_enabled: false,
        }
    }
}

impl PipelineConfig {
    /// Resolve raw options into a concrete policy
    ///
    /// `stopwords` is consulted only when the default stopword set is
    /// needed; it is an error for it to be missing in that case.
    pub fn resolve(
        options: &PipelineOptions,
        stopwords: Option<&dyn StopwordProvider>,
    ) -> Result<Self> {
        let stopword_policy =
            resolve_stopwords(&options.stopwords, options.append_stopwords, stopwords)?;
        let punctuation_policy =
            resolve_punctuation(&options.punctuation, options.append_punctuation);
        let known_words = resolve_known_words(options)?;

        if options.lemmatize && options.stem {
            log::debug!("lemmatize and stem both requested; stemming will be skipped");
        }

        Ok(Self {
            spellcheck_enabled: options.spellcheck,
            known_words,
            lemmatize_enabled: options.lemmatize,
            stem_enabled: options.stem,
            stopword_policy,
            lowercase_enabled: options.lower,
            punctuation_policy,
            whitespace_normalize_enabled: options.whitespace,
            number_removal_enabled: options.numbers,
        })
    }

    /// Enabled steps in execution order
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = Vec::with_capacity(Step::ALL.len());
        if self.whitespace_normalize_enabled {
            steps.push(Step::WhitespaceNormalization);
        }
        if self.lowercase_enabled {
            steps.push(Step::Lowercase);
        }
        if self.punctuation_policy.is_some() {
            steps.push(Step::PunctuationRemoval);
        }
        if self.stopword_policy.is_some() {
            steps.push(Step::StopwordRemoval);
        }
        if self.number_removal_enabled {
            steps.push(Step::NumberRemoval);
        }
        if self.spellcheck_enabled {
            steps.push(Step::SpellCorrection);
        }
        if self.lemmatize_enabled {
            steps.push(Step::Lemmatization);
        } else if self.stem_enabled {
            steps.push(Step::Stemming);
        }
        steps
    }

    /// Whether the spell checker is applied
    pub fn spellcheck_enabled(&self) -> bool {
        self.spellcheck_enabled
    }

    /// Words added to the spell checker's vocabulary
    pub fn known_words(&self) -> Option<&BTreeSet<String>> {
        self.known_words.as_ref()
    }

    /// Whether lemmatization is applied
    pub fn lemmatize_enabled(&self) -> bool {
        self.lemmatize_enabled
    }

    /// Whether stemming was requested (it still yields to lemmatization)
    pub fn stem_enabled(&self) -> bool {
        self.stem_enabled
    }

    /// Resolved stopword set
    pub fn stopword_policy(&self) -> Option<&BTreeSet<String>> {
        self.stopword_policy.as_ref()
    }

    /// Whether the text is lowercased
    pub fn lowercase_enabled(&self) -> bool {
        self.lowercase_enabled
    }

    /// Resolved punctuation set
    pub fn punctuation_policy(&self) -> Option<&BTreeSet<char>> {
        self.punctuation_policy.as_ref()
    }

    /// Whether whitespace runs are collapsed
    pub fn whitespace_normalize_enabled(&self) -> bool {
        self.whitespace_normalize_enabled
    }

    /// Whether digit runs are stripped
    pub fn number_removal_enabled(&self) -> bool {
        self.number_removal_enabled
    }
}

fn resolve_stopwords(
    option: &StopwordOption,
    append: bool,
    provider: Option<&dyn StopwordProvider>,
) -> Result<Option<BTreeSet<String>>> {
    match option {
        StopwordOption::Enabled(false) => Ok(None),
        StopwordOption::Enabled(true) => Ok(Some(load_default_stopwords(provider)?)),
        StopwordOption::Custom(words) => {
            let mut set: BTreeSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
            if append {
                set.extend(load_default_stopwords(provider)?);
            }
            Ok(Some(set))
        }
    }
}

fn load_default_stopwords(provider: Option<&dyn StopwordProvider>) -> Result<BTreeSet<String>> {
    let provider = provider.ok_or_else(|| {
        PipelineError::unavailable("stopwords", "no stopword provider configured")
    })?;
    let words = provider
        .default_stopwords()
        .map_err(|e| PipelineError::unavailable("stopwords", e.to_string()))?;
    Ok(words.into_iter().map(|w| w.to_lowercase()).collect())
}

fn resolve_punctuation(option: &PunctuationOption, append: bool) -> Option<BTreeSet<char>> {
    let mut set: BTreeSet<char> = match option {
        PunctuationOption::Enabled(false) => return None,
        PunctuationOption::Enabled(true) => return Some(default_punctuation()),
        PunctuationOption::Chars(chars) => chars.chars().collect(),
        PunctuationOption::List(entries) => entries.iter().flat_map(|e| e.chars()).collect(),
    };
    if append {
        set.extend(DEFAULT_PUNCTUATION.chars());
    }
    Some(set)
}

fn resolve_known_words(options: &PipelineOptions) -> Result<Option<BTreeSet<String>>> {
    let Some(words) = &options.known_words else {
        return Ok(None);
    };
    if !options.spellcheck {
        log::debug!("known_words given without spellcheck; ignoring");
        return Ok(None);
    }
    if let Some(bad) = words
        .iter()
        .find(|w| w.is_empty() || w.chars().any(char::is_whitespace))
    {
        return Err(PipelineError::Configuration(format!(
            "known word {bad:?} must be a single non-empty token"
        )));
    }
    Ok(Some(words.iter().cloned().collect()))
}
