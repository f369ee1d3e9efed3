//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Called before the sentences of each input file
    fn start_file(&mut self, _source: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single sentence
    fn format_sentence(&mut self, tokens: &[String]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Sentence text as written by every formatter
pub fn sentence_text(tokens: &[String]) -> String {
    tokens.join(" ")
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
