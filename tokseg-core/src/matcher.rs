//! Multi-token boundary matching
//!
//! A [`BoundaryPatternMatcher`] finds spans of consecutive tokens that
//! together act like a single sentence-ending token. The segmenter pulls
//! spans lazily and in order, so a matcher never has to look past the span
//! it is about to report.

use crate::error::{Error, Result};
use regex::Regex;
use std::ops::Range;

/// Finds multi-token spans that end a sentence
pub trait BoundaryPatternMatcher: Send + Sync {
    /// Iterate over matching spans, as token index ranges, in increasing order
    ///
    /// Spans must be non-empty and lie within `tokens`. The iterator is
    /// consumed once per segmentation call.
    fn find_iter<'t>(&'t self, tokens: &'t [&'t str]) -> Box<dyn Iterator<Item = Range<usize>> + 't>;
}

/// Compile a pattern so that it must match a whole token
pub(crate) fn compile_anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| Error::pattern(pattern, e))
}

/// A fixed sequence of per-token patterns
#[derive(Debug, Clone)]
pub struct TokenSequencePattern {
    elements: Vec<Regex>,
}

impl TokenSequencePattern {
    /// Compile one regex per token position
    pub fn new<S: AsRef<str>>(elements: &[S]) -> Result<Self> {
        if elements.is_empty() {
            return Err(Error::Configuration(
                "multi-token pattern must have at least one element".to_string(),
            ));
        }
        let elements = elements
            .iter()
            .map(|e| compile_anchored(e.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { elements })
    }

    /// Number of tokens the pattern spans
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false; patterns have at least one element
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the pattern matches the tokens starting at `start`
    pub fn matches_at(&self, tokens: &[&str], start: usize) -> bool {
        tokens.len() >= start + self.len()
            && self
                .elements
                .iter()
                .zip(&tokens[start..])
                .all(|(re, token)| re.is_match(token))
    }
}

impl BoundaryPatternMatcher for TokenSequencePattern {
    fn find_iter<'t>(&'t self, tokens: &'t [&'t str]) -> Box<dyn Iterator<Item = Range<usize>> + 't> {
        Box::new(SpanScan {
            tokens,
            position: 0,
            longest_at: move |tokens: &[&str], start: usize| {
                self.matches_at(tokens, start).then(|| self.len())
            },
        })
    }
}

/// Several sequence patterns; the longest match at a position wins
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<TokenSequencePattern>,
}

impl PatternSet {
    /// Compile a set of sequences
    pub fn new<P, S>(patterns: &[P]) -> Result<Self>
    where
        P: AsRef<[S]>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .iter()
            .map(|p| TokenSequencePattern::new(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Number of sequences in the set
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set has no sequences
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn longest_at(&self, tokens: &[&str], start: usize) -> Option<usize> {
        self.patterns
            .iter()
            .filter(|p| p.matches_at(tokens, start))
            .map(TokenSequencePattern::len)
            .max()
    }
}

impl BoundaryPatternMatcher for PatternSet {
    fn find_iter<'t>(&'t self, tokens: &'t [&'t str]) -> Box<dyn Iterator<Item = Range<usize>> + 't> {
        Box::new(SpanScan {
            tokens,
            position: 0,
            longest_at: move |tokens: &[&str], start: usize| self.longest_at(tokens, start),
        })
    }
}

/// Left-to-right scan producing non-overlapping spans
struct SpanScan<'t, F> {
    tokens: &'t [&'t str],
    position: usize,
    longest_at: F,
}

impl<F> Iterator for SpanScan<'_, F>
where
    F: Fn(&[&str], usize) -> Option<usize>,
{
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        while self.position < self.tokens.len() {
            let start = self.position;
            match (self.longest_at)(self.tokens, start) {
                Some(len) if len > 0 => {
                    self.position = start + len;
                    return Some(start..start + len);
                }
                _ => self.position += 1,
            }
        }
        None
    }
}
