//! Pure text transformations used by the executor
//!
//! Word-level steps split on single spaces and rejoin with single spaces.
//! Empty tokens produced by adjacent spaces are kept in place, so these
//! steps only see real words when whitespace normalization ran first.

use std::collections::BTreeSet;

use regex::Regex;

/// Collapse every whitespace run into one ASCII space
pub(crate) fn normalize_whitespace(pattern: &Regex, text: &str) -> String {
    pattern.replace_all(text, " ").into_owned()
}

/// Remove every character contained in `chars`
pub(crate) fn remove_chars(text: &str, chars: &BTreeSet<char>) -> String {
    text.chars().filter(|c| !chars.contains(c)).collect()
}

/// Drop tokens whose lowercase form is a stopword
pub(crate) fn remove_stopwords(text: &str, stopwords: &BTreeSet<String>) -> String {
    text.split(' ')
        .filter(|token| !stopwords.contains(&token.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove every match of `pattern`
pub(crate) fn remove_matches(pattern: &Regex, text: &str) -> String {
    pattern.replace_all(text, "").into_owned()
}

/// Replace each space-separated token with the result of `f`
///
/// Stops at the first error.
pub(crate) fn map_tokens<E, F>(text: &str, mut f: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let tokens = text
        .split(' ')
        .map(|token| {
            if token.is_empty() {
                Ok(String::new())
            } else {
                f(token)
            }
        })
        .collect::<Result<Vec<_>, E>>()?;
    Ok(tokens.join(" "))
}
