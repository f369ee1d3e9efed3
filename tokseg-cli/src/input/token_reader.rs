//! Turning input files into token streams

use crate::error::CliError;
use anyhow::Result;
use serde_json::Value;
use tokseg_core::config::defaults::NEWLINE;

/// How an input file encodes its tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// One token per line; a blank line becomes a newline token
    Lines,
    /// Tokens separated by whitespace; every line break becomes a newline token
    Whitespace,
    /// A JSON array of tokens (strings, numbers or objects with a text field)
    Json,
}

impl InputFormat {
    /// All formats, in documentation order
    pub const ALL: [InputFormat; 3] = [InputFormat::Lines, InputFormat::Whitespace, InputFormat::Json];

    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Lines => "lines",
            InputFormat::Whitespace => "whitespace",
            InputFormat::Json => "json",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            InputFormat::Lines => "one token per line, blank line = newline token",
            InputFormat::Whitespace => "whitespace separated tokens, line break = newline token",
            InputFormat::Json => "JSON array of tokens with optional annotations",
        }
    }
}

/// Read the tokens of one file
///
/// Every token becomes a JSON value so that annotated JSON input and plain
/// text input go through the same segmenter.
pub fn read_tokens(content: &str, format: InputFormat, source: &str) -> Result<Vec<Value>> {
    let tokens = match format {
        InputFormat::Lines => content
            .lines()
            .map(|line| {
                let line = line.trim();
                Value::from(if line.is_empty() { NEWLINE } else { line })
            })
            .collect(),
        InputFormat::Whitespace => {
            let mut tokens = Vec::new();
            for (i, line) in content.split('\n').enumerate() {
                if i > 0 {
                    tokens.push(Value::from(NEWLINE));
                }
                tokens.extend(line.split_whitespace().map(Value::from));
            }
            tokens
        }
        InputFormat::Json if content.trim().is_empty() => Vec::new(),
        InputFormat::Json => match serde_json::from_str::<Value>(content) {
            Ok(Value::Array(tokens)) => tokens,
            Ok(_) => {
                return Err(CliError::MalformedInput {
                    path: source.to_string(),
                    reason: "expected a JSON array of tokens".to_string(),
                }
                .into())
            }
            Err(e) => {
                return Err(CliError::MalformedInput {
                    path: source.to_string(),
                    reason: e.to_string(),
                }
                .into())
            }
        },
    };

    log::debug!("Read {} tokens from {}", tokens.len(), source);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lines_format() {
        let tokens = read_tokens("Hello\nworld\n.\n\nNext\n", InputFormat::Lines, "t").unwrap();
        assert_eq!(tokens, vec![json!("Hello"), json!("world"), json!("."), json!("\n"), json!("Next")]);
    }

    #[test]
    fn test_lines_format_trims_carriage_returns() {
        let tokens = read_tokens("A\r\n \r\nB", InputFormat::Lines, "t").unwrap();
        assert_eq!(tokens, vec![json!("A"), json!("\n"), json!("B")]);
    }

    #[test]
    fn test_whitespace_format() {
        let tokens = read_tokens("A  B .\n\nC", InputFormat::Whitespace, "t").unwrap();
        assert_eq!(
            tokens,
            vec![json!("A"), json!("B"), json!("."), json!("\n"), json!("\n"), json!("C")]
        );
    }

    #[test]
    fn test_json_format() {
        let tokens = read_tokens(r#"["A", {"text": ".", "forced_end": true}]"#, InputFormat::Json, "t").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1]["forced_end"], json!(true));
    }

    #[test]
    fn test_json_format_errors() {
        let err = read_tokens(r#"{"text": "A"}"#, InputFormat::Json, "doc.json").unwrap_err();
        assert!(err.to_string().contains("expected a JSON array"));
        assert!(err.to_string().contains("doc.json"));

        let err = read_tokens("[", InputFormat::Json, "doc.json").unwrap_err();
        assert!(err.to_string().starts_with("Malformed input in doc.json"));
    }

    #[test]
    fn test_empty_content() {
        for format in InputFormat::ALL {
            assert!(read_tokens("", format, "t").unwrap().is_empty());
        }
        assert!(read_tokens("[]", InputFormat::Json, "t").unwrap().is_empty());
    }
}
