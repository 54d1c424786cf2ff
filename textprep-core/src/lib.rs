//! Configurable text-normalization pipeline
//!
//! A [`Pipeline`] is built once from a set of options and then applied to
//! single strings or to ordered collections of strings. Options are
//! resolved up front: punctuation and stopword settings become concrete
//! sets, and the lemmatize/stem choice becomes a single step. Steps then
//! always run in one fixed order, whatever order the options came in:
//!
//! 1. whitespace normalization
//! 2. lowercasing
//! 3. punctuation removal
//! 4. stopword removal
//! 5. number removal
//! 6. spell correction
//! 7. lemmatization, or else
//! 8. stemming
//!
//! Linguistic work is delegated to the traits in [`services`]. The
//! [`language`] module provides simple English implementations of them.
//!
//! # Example
//!
//! ```rust
//! use textprep_core::{Collaborators, Pipeline, PipelineOptions, StopwordOption};
//!
//! let options = PipelineOptions {
//!     lower: true,
//!     punctuation: textprep_core::PunctuationOption::Enabled(true),
//!     stopwords: StopwordOption::Enabled(true),
//!     ..Default::default()
//! };
//! let pipeline = Pipeline::from_options(options, Collaborators::english().unwrap()).unwrap();
//!
//! let text = "The 2 wuick brown foxes jumped, over the  lazy dog.";
//! assert_eq!(pipeline.transform(text).unwrap(), "2 wuick brown foxes jumped lazy dog");
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod options;
pub mod pipeline;
pub mod services;

pub use config::{default_punctuation, PipelineConfig, DEFAULT_PUNCTUATION};
pub use error::{PipelineError, Result, ServiceError};
pub use options::{PipelineOptions, PunctuationOption, StopwordOption};
pub use pipeline::{Pipeline, PipelineBuilder, Step};
pub use services::{Collaborators, Lemmatizer, SpellChecker, Stemmer, StopwordProvider};
