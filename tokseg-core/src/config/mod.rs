//! Segmenter configuration
//!
//! [`SegmenterConfig`] is plain data: every option is independently
//! overridable and has a default. Patterns are compiled once, when a
//! [`Segmenter`](crate::Segmenter) is built from the configuration.

mod file;
mod policy;

pub use file::{BoundarySection, ConfigFile, DiscardSection, MarkupSection, ModeSection, NewlineSection};
pub use policy::NewlinePolicy;

use std::collections::BTreeSet;

/// Default configuration constants
pub mod defaults {
    /// Tokens that can end a sentence
    pub const BOUNDARY_REGEX: &str = r"\.|[!?]+|[。．！？]+";

    /// Tokens that stick to a sentence that just ended
    pub const BOUNDARY_FOLLOWER_REGEX: &str = r#"[\p{Pe}\p{Pf}"'>＂＇＞]|''|-R[CRS]B-"#;

    /// Newline token as emitted by most tokenizers
    pub const NEWLINE: &str = "\n";

    /// Placeholder newline token used by tokenizers that keep newlines
    pub const NEWLINE_PLACEHOLDER: &str = "*NL*";

    /// Tokens discarded by default
    pub const TOKENS_TO_DISCARD: [&str; 2] = [NEWLINE, NEWLINE_PLACEHOLDER];

    /// Tokens recognized as newline markers by default
    pub const NEWLINE_TOKENS: [&str; 2] = [NEWLINE, NEWLINE_PLACEHOLDER];

    /// Default discard set as owned strings
    pub fn tokens_to_discard() -> std::collections::BTreeSet<String> {
        TOKENS_TO_DISCARD.iter().map(|s| s.to_string()).collect()
    }

    /// Default newline marker set as owned strings
    pub fn newline_tokens() -> std::collections::BTreeSet<String> {
        NEWLINE_TOKENS.iter().map(|s| s.to_string()).collect()
    }
}

/// Sentence segmentation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Tokens matching this pattern (as a whole) can end a sentence
    pub boundary_regex: String,
    /// Tokens matching this pattern attach to a sentence that just ended
    pub boundary_follower_regex: String,
    /// Exact token texts dropped from output
    pub tokens_to_discard: BTreeSet<String>,
    /// Tokens matching any of these patterns are dropped from output
    pub token_regexes_to_discard: Vec<String>,
    /// XML elements whose tags force a sentence break and are dropped
    pub xml_break_element_names: BTreeSet<String>,
    /// Only tokens inside this XML element are segmented
    pub region_element_name: Option<String>,
    /// Exact token texts recognized as newline markers
    pub newline_tokens: BTreeSet<String>,
    /// How newline markers affect boundaries
    pub newline_policy: NewlinePolicy,
    /// Token sequences (one regex per token) that end a sentence
    pub multi_token_patterns: Vec<Vec<String>>,
    /// Emit all surviving tokens as a single sentence
    pub one_sentence: bool,
    /// Keep sentences with no tokens
    pub allow_empty_sentences: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            boundary_regex: defaults::BOUNDARY_REGEX.to_string(),
            boundary_follower_regex: defaults::BOUNDARY_FOLLOWER_REGEX.to_string(),
            tokens_to_discard: defaults::tokens_to_discard(),
            token_regexes_to_discard: Vec::new(),
            xml_break_element_names: BTreeSet::new(),
            region_element_name: None,
            newline_tokens: defaults::newline_tokens(),
            newline_policy: NewlinePolicy::Never,
            multi_token_patterns: Vec::new(),
            one_sentence: false,
            allow_empty_sentences: false,
        }
    }
}

impl SegmenterConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Defaults with a custom discard set
    pub fn with_tokens_to_discard<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens_to_discard: tokens.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Defaults with the given newline policy
    pub fn with_newline_policy(policy: NewlinePolicy) -> Self {
        Self {
            newline_policy: policy,
            ..Default::default()
        }
    }

    /// Defaults, optionally in one-sentence mode
    pub fn one_sentence(one_sentence: bool) -> Self {
        Self {
            one_sentence,
            ..Default::default()
        }
    }
}

/// Fluent builder for [`SegmenterConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: SegmenterConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// Set the boundary token pattern
    pub fn boundary_regex(mut self, pattern: impl Into<String>) -> Self {
        self.config.boundary_regex = pattern.into();
        self
    }

    /// Set the boundary follower pattern
    pub fn boundary_follower_regex(mut self, pattern: impl Into<String>) -> Self {
        self.config.boundary_follower_regex = pattern.into();
        self
    }

    /// Replace the exact-match discard set
    pub fn tokens_to_discard<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tokens_to_discard = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Add a discard pattern
    pub fn token_regex_to_discard(mut self, pattern: impl Into<String>) -> Self {
        self.config.token_regexes_to_discard.push(pattern.into());
        self
    }

    /// Add an XML element that breaks sentences
    pub fn xml_break_element(mut self, name: impl Into<String>) -> Self {
        self.config.xml_break_element_names.insert(name.into());
        self
    }

    /// Restrict segmentation to the inside of an XML element
    pub fn region_element(mut self, name: impl Into<String>) -> Self {
        self.config.region_element_name = Some(name.into());
        self
    }

    /// Replace the newline marker set
    pub fn newline_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.newline_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Set the newline policy
    pub fn newline_policy(mut self, policy: NewlinePolicy) -> Self {
        self.config.newline_policy = policy;
        self
    }

    /// Set the newline policy by name
    pub fn newline_policy_name(mut self, name: &str) -> crate::Result<Self> {
        self.config.newline_policy = name.parse()?;
        Ok(self)
    }

    /// Add a multi-token boundary pattern, one regex per token
    pub fn multi_token_pattern<I, S>(mut self, pattern: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .multi_token_patterns
            .push(pattern.into_iter().map(Into::into).collect());
        self
    }

    /// Enable or disable one-sentence mode
    pub fn one_sentence(mut self, enabled: bool) -> Self {
        self.config.one_sentence = enabled;
        self
    }

    /// Keep or drop empty sentences
    pub fn allow_empty_sentences(mut self, allow: bool) -> Self {
        self.config.allow_empty_sentences = allow;
        self
    }

    /// Build the configuration
    pub fn build(self) -> SegmenterConfig {
        self.config
    }
}
