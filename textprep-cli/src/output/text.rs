//! Plain text output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one transformed line per input line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.writer, "{}", record.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
