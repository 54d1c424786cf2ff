//! Frequency-dictionary spell checker
//!
//! Candidates are generated by single-character edits (deletes,
//! transposes, replaces, inserts). A known word is its own correction;
//! otherwise the most frequent known word at distance 1 wins, then at
//! distance 2. Ties go to the alphabetically first word so results are
//! deterministic. Tokens with no candidate, without any letter, or more
//! than two characters longer than the longest known word are returned
//! unchanged.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use crate::error::{PipelineError, Result, ServiceError};
use crate::services::SpellChecker;

/// Edits allowed between a token and its correction
const MAX_DISTANCE: usize = 2;

/// Spell checker over a word-frequency dictionary
#[derive(Debug, Clone)]
pub struct DictionarySpellChecker {
    frequencies: HashMap<String, u64>,
    alphabet: BTreeSet<char>,
    longest_word: usize,
}

impl DictionarySpellChecker {
    /// Build from `(word, count)` pairs
    pub fn from_frequencies<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut checker = Self::empty();
        for (word, count) in entries {
            checker.add(word.as_ref(), count);
        }
        checker
    }

    /// Load a dictionary file with one `word [count]` entry per line
    ///
    /// Blank lines and lines starting with `#` are skipped; a missing count
    /// means 1. An unreadable, malformed or empty dictionary is an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let resource = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::unavailable(&resource, e.to_string()))?;
        Self::parse(&content).map_err(|reason| PipelineError::unavailable(&resource, reason))
    }

    /// Parse dictionary text in the `word [count]` format
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let mut checker = Self::empty();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(word), count, None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(format!("line {}: expected `word [count]`", line_no + 1));
            };
            let count = match count {
                Some(raw) => raw
                    .parse::<u64>()
                    .map_err(|e| format!("line {}: bad count {raw:?}: {e}", line_no + 1))?,
                None => 1,
            };
            checker.add(word, count);
        }
        if checker.is_empty() {
            return Err("dictionary is empty".to_string());
        }
        Ok(checker)
    }

    fn empty() -> Self {
        Self {
            frequencies: HashMap::new(),
            alphabet: BTreeSet::new(),
            longest_word: 0,
        }
    }

    /// Number of known words
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the dictionary has no words
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Whether `word` is in the dictionary (case-insensitive)
    pub fn is_known(&self, word: &str) -> bool {
        self.frequencies.contains_key(&word.to_lowercase())
    }

    fn add(&mut self, word: &str, count: u64) {
        let word = word.to_lowercase();
        self.alphabet.extend(word.chars());
        self.longest_word = self.longest_word.max(word.chars().count());
        *self.frequencies.entry(word).or_insert(0) += count;
    }

    fn best_known<'a>(&self, candidates: impl IntoIterator<Item = &'a String>) -> Option<String> {
        candidates
            .into_iter()
            .filter_map(|c| self.frequencies.get(c).map(|f| (c, *f)))
            .max_by(|(a, fa), (b, fb)| fa.cmp(fb).then_with(|| b.cmp(a)))
            .map(|(c, _)| c.clone())
    }

    fn edits1(&self, word: &str) -> HashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut edits = HashSet::new();

        for i in 0..=chars.len() {
            let (left, right) = chars.split_at(i);
            let left: String = left.iter().collect();

            if let Some((_, rest)) = right.split_first() {
                let rest: String = rest.iter().collect();
                edits.insert(format!("{left}{rest}"));

                for &c in &self.alphabet {
                    edits.insert(format!("{left}{c}{rest}"));
                }
            }

            if right.len() > 1 {
                let rest: String = right[2..].iter().collect();
                edits.insert(format!("{left}{}{}{rest}", right[1], right[0]));
            }

            let right: String = right.iter().collect();
            for &c in &self.alphabet {
                edits.insert(format!("{left}{c}{right}"));
            }
        }

        edits
    }
}

impl SpellChecker for DictionarySpellChecker {
    fn load_vocabulary(
        &mut self,
        words: &BTreeSet<String>,
    ) -> std::result::Result<(), ServiceError> {
        for word in words {
            self.add(word, 1);
        }
        if self.is_empty() {
            return Err(ServiceError::new("spellchecker", "dictionary is empty"));
        }
        Ok(())
    }

    fn correct(&self, token: &str) -> std::result::Result<String, ServiceError> {
        if self.is_empty() {
            return Err(ServiceError::new("spellchecker", "dictionary is empty"));
        }

        let lower = token.to_lowercase();
        if !lower.chars().any(char::is_alphabetic) || self.frequencies.contains_key(&lower) {
            return Ok(token.to_string());
        }

        // No known word is reachable within MAX_DISTANCE edits
        let length = lower.chars().count();
        if length > self.longest_word + MAX_DISTANCE {
            return Ok(token.to_string());
        }

        let first = self.edits1(&lower);
        if let Some(best) = self.best_known(&first) {
            return Ok(best);
        }

        // A second edit changes the length by at most one
        let second: HashSet<String> = first
            .iter()
            .filter(|e| e.chars().count() <= self.longest_word + 1)
            .flat_map(|e| self.edits1(e))
            .collect();
        Ok(self.best_known(&second).unwrap_or_else(|| token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn checker() -> DictionarySpellChecker {
        DictionarySpellChecker::from_frequencies([
            ("the", 500),
            ("quick", 40),
            ("quack", 5),
            ("brown", 30),
            ("fox", 20),
            ("jumped", 10),
            ("lazy", 10),
            ("dog", 25),
        ])
    }

    #[test]
    fn test_known_word_unchanged() {
        let c = checker();
        assert_eq!(c.correct("quick").unwrap(), "quick");
        assert_eq!(c.correct("The").unwrap(), "The");
    }

    #[test]
    fn test_distance_one_prefers_frequency() {
        let c = checker();
        assert_eq!(c.correct("wuick").unwrap(), "quick");
        assert_eq!(c.correct("qaick").unwrap(), "quick");
    }

    #[test]
    fn test_distance_two() {
        let c = checker();
        assert_eq!(c.correct("brwnn").unwrap(), "brown");
    }

    #[test]
    fn test_no_candidate_and_numbers_unchanged() {
        let c = checker();
        assert_eq!(c.correct("zzzzzzzz").unwrap(), "zzzzzzzz");
        assert_eq!(c.correct("2024").unwrap(), "2024");
    }

    #[test]
    fn test_load_vocabulary_adds_words() {
        let mut c = checker();
        assert_eq!(c.correct("wuick").unwrap(), "quick");
        let known: BTreeSet<String> = ["wuick".to_string()].into_iter().collect();
        c.load_vocabulary(&known).unwrap();
        assert!(c.is_known("wuick"));
        assert_eq!(c.correct("wuick").unwrap(), "wuick");
    }

    #[test]
    fn test_empty_checker_fails_loudly() {
        let mut c = DictionarySpellChecker::from_frequencies(Vec::<(&str, u64)>::new());
        assert!(c.correct("word").is_err());
        assert!(c.load_vocabulary(&BTreeSet::new()).is_err());
    }

    #[test]
    fn test_long_token_returned_unchanged() {
        let c = checker();
        let token = "zq".repeat(30);
        assert_eq!(c.correct(&token).unwrap(), token);
        assert_eq!(c.correct("jumpedxyz").unwrap(), "jumpedxyz");
    }

    #[test]
    fn test_token_two_longer_than_longest_word() {
        let c = checker();
        assert_eq!(c.correct("jumpedss").unwrap(), "jumped");
    }

    #[test]
    fn test_parse_formats() {
        let c = DictionarySpellChecker::parse("# comment\nthe 10\n\nfox\nFox 2\n").unwrap();
        assert_eq!(c.len(), 2);
        assert!(c.is_known("FOX"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(DictionarySpellChecker::parse("").is_err());
        assert!(DictionarySpellChecker::parse("the ten").is_err());
        assert!(DictionarySpellChecker::parse("the 1 extra").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "quick 3\nbrown 2").unwrap();
        let c = DictionarySpellChecker::from_file(file.path()).unwrap();
        assert_eq!(c.correct("wuick").unwrap(), "quick");

        let missing = DictionarySpellChecker::from_file("/nonexistent/words.txt");
        assert!(matches!(
            missing,
            Err(PipelineError::ResourceUnavailable { .. })
        ));
    }
}
