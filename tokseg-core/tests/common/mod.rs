//! Shared helpers for integration tests

#![allow(dead_code)]

use tokseg_core::{Segmenter, SegmenterConfig, TokenView};

/// Segment and flatten each sentence to its token texts
pub fn texts<T: TokenView>(config: SegmenterConfig, tokens: &[T]) -> Vec<Vec<String>> {
    let segmenter = Segmenter::new(config).expect("config should compile");
    segmenter
        .segment(tokens)
        .expect("tokens should be supported")
        .into_iter()
        .map(|sentence| {
            sentence
                .into_iter()
                .map(|t| t.text().map(|s| s.into_owned()).unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Split a space separated string into tokens; `\n` in the input is a newline token
pub fn toks(s: &str) -> Vec<&str> {
    s.split(' ').filter(|t| !t.is_empty()).collect()
}

/// Build expected output from space separated sentences
pub fn sents(sentences: &[&str]) -> Vec<Vec<String>> {
    sentences
        .iter()
        .map(|s| toks(s).into_iter().map(str::to_string).collect())
        .collect()
}
