//! Plain text output formatter

use super::{sentence_text, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, tokens: &[String]) -> Result<()> {
        writeln!(self.writer, "{}", sentence_text(tokens))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn test_one_sentence_per_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.start_file("a.txt").unwrap();
        formatter.format_sentence(&tokens("Hello world .")).unwrap();
        formatter.format_sentence(&tokens("Bye !")).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(output, "Hello world .\nBye !\n");
    }

    #[test]
    fn test_empty_sentence_is_blank_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_sentence(&[]).unwrap();
        assert_eq!(formatter.writer, b"\n");
    }
}
