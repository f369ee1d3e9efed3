//! TOML configuration file schema and loading

use super::{defaults, NewlinePolicy, SegmenterConfig};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Root of a segmenter configuration file
///
/// Every section is optional; missing keys take the library defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub boundaries: BoundarySection,
    #[serde(default)]
    pub discard: DiscardSection,
    #[serde(default)]
    pub markup: MarkupSection,
    #[serde(default)]
    pub newlines: NewlineSection,
    #[serde(default)]
    pub mode: ModeSection,
}

/// Boundary and follower patterns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundarySection {
    #[serde(default = "default_boundary_regex")]
    pub token_regex: String,
    #[serde(default = "default_follower_regex")]
    pub follower_regex: String,
    #[serde(default)]
    pub multi_token_patterns: Vec<Vec<String>>,
}

/// Tokens removed from the output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscardSection {
    #[serde(default = "defaults::tokens_to_discard")]
    pub tokens: BTreeSet<String>,
    #[serde(default)]
    pub regexes: Vec<String>,
}

/// XML markup handling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkupSection {
    #[serde(default)]
    pub break_elements: BTreeSet<String>,
    #[serde(default)]
    pub region_element: Option<String>,
}

/// Newline handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewlineSection {
    #[serde(default = "defaults::newline_tokens")]
    pub tokens: BTreeSet<String>,
    #[serde(default)]
    pub policy: NewlinePolicy,
}

/// Output mode switches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeSection {
    #[serde(default)]
    pub one_sentence: bool,
    #[serde(default)]
    pub allow_empty_sentences: bool,
}

fn default_boundary_regex() -> String {
    defaults::BOUNDARY_REGEX.to_string()
}

fn default_follower_regex() -> String {
    defaults::BOUNDARY_FOLLOWER_REGEX.to_string()
}

impl Default for BoundarySection {
    fn default() -> Self {
        Self {
            token_regex: default_boundary_regex(),
            follower_regex: default_follower_regex(),
            multi_token_patterns: Vec::new(),
        }
    }
}

impl Default for DiscardSection {
    fn default() -> Self {
        Self {
            tokens: defaults::tokens_to_discard(),
            regexes: Vec::new(),
        }
    }
}

impl Default for NewlineSection {
    fn default() -> Self {
        Self {
            tokens: defaults::newline_tokens(),
            policy: NewlinePolicy::default(),
        }
    }
}

impl From<ConfigFile> for SegmenterConfig {
    fn from(file: ConfigFile) -> Self {
        SegmenterConfig {
            boundary_regex: file.boundaries.token_regex,
            boundary_follower_regex: file.boundaries.follower_regex,
            tokens_to_discard: file.discard.tokens,
            token_regexes_to_discard: file.discard.regexes,
            xml_break_element_names: file.markup.break_elements,
            region_element_name: file.markup.region_element,
            newline_tokens: file.newlines.tokens,
            newline_policy: file.newlines.policy,
            multi_token_patterns: file.boundaries.multi_token_patterns,
            one_sentence: file.mode.one_sentence,
            allow_empty_sentences: file.mode.allow_empty_sentences,
        }
    }
}

impl From<&SegmenterConfig> for ConfigFile {
    fn from(config: &SegmenterConfig) -> Self {
        ConfigFile {
            boundaries: BoundarySection {
                token_regex: config.boundary_regex.clone(),
                follower_regex: config.boundary_follower_regex.clone(),
                multi_token_patterns: config.multi_token_patterns.clone(),
            },
            discard: DiscardSection {
                tokens: config.tokens_to_discard.clone(),
                regexes: config.token_regexes_to_discard.clone(),
            },
            markup: MarkupSection {
                break_elements: config.xml_break_element_names.clone(),
                region_element: config.region_element_name.clone(),
            },
            newlines: NewlineSection {
                tokens: config.newline_tokens.clone(),
                policy: config.newline_policy,
            },
            mode: ModeSection {
                one_sentence: config.one_sentence,
                allow_empty_sentences: config.allow_empty_sentences,
            },
        }
    }
}

impl SegmenterConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.into())
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Configuration(msg) => {
                Error::Configuration(format!("Failed to parse {}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Render this configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(&ConfigFile::from(self))
            .map_err(|e| Error::Configuration(e.to_string()))
    }
}
