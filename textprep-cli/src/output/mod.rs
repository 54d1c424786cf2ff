//! Output formatting module

use anyhow::Result;
use serde::Serialize;

/// One transformed line of one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Input file the line came from
    pub source: String,
    /// 1-based line number in the input file
    pub line: usize,
    /// Transformed text
    pub text: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single transformed line
    fn format_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
