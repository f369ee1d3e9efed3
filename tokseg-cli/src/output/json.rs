//! JSON output formatter

use super::{sentence_text, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs all sentences as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    source: String,
    next_index: usize,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// Input file the sentence came from
    pub file: String,
    /// Position of the sentence within its file
    pub index: usize,
    /// The sentence tokens
    pub tokens: Vec<String>,
    /// Tokens joined by single spaces
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            source: String::new(),
            next_index: 0,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn start_file(&mut self, source: &str) -> Result<()> {
        self.source = source.to_string();
        self.next_index = 0;
        Ok(())
    }

    fn format_sentence(&mut self, tokens: &[String]) -> Result<()> {
        self.sentences.push(SentenceData {
            file: self.source.clone(),
            index: self.next_index,
            tokens: tokens.to_vec(),
            text: sentence_text(tokens),
        });
        self.next_index += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
