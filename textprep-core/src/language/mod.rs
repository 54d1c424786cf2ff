//! Reference linguistic services
//!
//! Small, data-driven implementations of the service traits, backed by the
//! TOML resources in `configs/`. The pipeline only sees them through
//! [`crate::services`].

pub mod config;
pub mod loader;

mod lemmatizer;
mod spelling;
mod stemmer;
mod stopwords;

pub use config::{LanguageResources, LemmaTable, StemmerRules, SuffixRule};
pub use lemmatizer::LexiconLemmatizer;
pub use spelling::DictionarySpellChecker;
pub use stemmer::SuffixStemmer;
pub use stopwords::EmbeddedStopwords;
