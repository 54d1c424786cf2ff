//! Rule-table suffix stemmer

use crate::error::{Result, ServiceError};
use crate::language::config::{LanguageResources, StemmerRules, SuffixRule};
use crate::language::loader;
use crate::services::Stemmer;

/// Stemmer driven by an ordered suffix table
#[derive(Debug, Clone)]
pub struct SuffixStemmer {
    rules: Vec<SuffixRule>,
    min_stem_length: usize,
}

impl SuffixStemmer {
    /// Stemmer with the embedded English rules
    pub fn english() -> Result<Self> {
        Ok(Self::from_resources(&loader::english()?))
    }

    /// Build from loaded language resources
    pub fn from_resources(resources: &LanguageResources) -> Self {
        Self::from_rules(&resources.stemmer)
    }

    /// Build from a rule table
    pub fn from_rules(rules: &StemmerRules) -> Self {
        Self {
            rules: rules.rules.clone(),
            min_stem_length: rules.min_stem_length,
        }
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, token: &str) -> std::result::Result<String, ServiceError> {
        let lower = token.to_lowercase();
        Ok(rewrite_suffix(&lower, &self.rules, self.min_stem_length).unwrap_or(lower))
    }
}

/// Apply the first rule whose suffix matches `word`
///
/// Returns `None` when no suffix matches, or when the rewritten word would
/// be shorter than `min_stem_length` characters; later rules are not tried
/// in that case.
pub(crate) fn rewrite_suffix(
    word: &str,
    rules: &[SuffixRule],
    min_stem_length: usize,
) -> Option<String> {
    let rule = rules.iter().find(|r| word.ends_with(r.suffix.as_str()))?;
    let stem = &word[..word.len() - rule.suffix.len()];
    let rewritten = format!("{stem}{}", rule.replacement);
    if rewritten.chars().count() < min_stem_length {
        return None;
    }
    Some(rewritten)
}
