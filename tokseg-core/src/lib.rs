//! Rule-based sentence segmentation over tokenizer output
//!
//! tokseg groups an already tokenized stream into sentences. It never looks
//! at characters inside tokens beyond matching whole tokens against
//! configurable patterns, so it works with any tokenizer that produces an
//! ordered sequence of tokens.
//!
//! The segmenter understands:
//! - sentence-ending tokens and the closing punctuation that follows them
//! - newline markers, with a configurable [`NewlinePolicy`]
//! - XML tags that force breaks or restrict segmentation to a region
//! - per-token annotations that force or suppress boundaries
//! - multi-token boundary patterns
//!
//! # Example
//!
//! ```rust
//! use tokseg_core::{Segmenter, SegmenterConfig};
//!
//! let segmenter = Segmenter::new(SegmenterConfig::default()).unwrap();
//! let tokens = ["Hello", "world", ".", "How", "are", "you", "?"];
//!
//! let sentences = segmenter.segment(&tokens).unwrap();
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[1], vec![&"How", &"are", &"you", &"?"]);
//! ```
//!
//! Tokens can carry annotations through [`TokenView`]:
//!
//! ```rust
//! use tokseg_core::{segment, SegmenterConfig, Token};
//!
//! let tokens = vec![
//!     Token::new("Title"),
//!     Token::new("Body").forced_end(),
//!     Token::new("More"),
//! ];
//! let sentences = segment(&tokens, &SegmenterConfig::default()).unwrap();
//! assert_eq!(sentences.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod token;
pub mod xml;

mod batch;
mod segmenter;
mod state;

pub use config::{ConfigBuilder, ConfigFile, NewlinePolicy, SegmenterConfig};
pub use error::{Error, Result};
pub use matcher::{BoundaryPatternMatcher, PatternSet, TokenSequencePattern};
pub use segmenter::{Segmenter, Sentence};
pub use token::{Token, TokenView};

/// Segment tokens with a one-off segmenter
///
/// Compiles `config` on every call; build a [`Segmenter`] once when
/// segmenting more than one stream.
pub fn segment<'a, T: TokenView>(
    tokens: &'a [T],
    config: &SegmenterConfig,
) -> Result<Vec<Sentence<'a, T>>> {
    Segmenter::new(config.clone())?.segment(tokens)
}
