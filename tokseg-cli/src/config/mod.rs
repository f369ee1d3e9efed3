//! Configuration layering
//!
//! The effective segmenter configuration is built from the library defaults,
//! then an optional TOML file, then command-line flags.

use crate::error::CliError;
use anyhow::{Context, Result};
use std::path::Path;
use tokseg_core::{ConfigBuilder, NewlinePolicy, SegmenterConfig};

/// Command-line settings that override the configuration file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Newline policy name
    pub newline_policy: Option<String>,
    /// Force one-sentence mode
    pub one_sentence: bool,
    /// Force keeping empty sentences
    pub allow_empty_sentences: bool,
    /// Region element name
    pub region_element: Option<String>,
    /// Additional break element names
    pub xml_break_elements: Vec<String>,
    /// Additional tokens to discard
    pub tokens_to_discard: Vec<String>,
}

impl ConfigOverrides {
    /// Apply the overrides on top of a configuration
    pub fn apply(&self, config: SegmenterConfig) -> Result<SegmenterConfig> {
        let mut config = config;

        if let Some(name) = &self.newline_policy {
            config.newline_policy = name
                .parse::<NewlinePolicy>()
                .map_err(CliError::from)
                .context("Invalid --newline-policy")?;
        }
        if self.one_sentence {
            config.one_sentence = true;
        }
        if self.allow_empty_sentences {
            config.allow_empty_sentences = true;
        }

        let mut builder = ConfigBuilder::from_config(config);
        if let Some(region) = &self.region_element {
            builder = builder.region_element(region.as_str());
        }
        for name in &self.xml_break_elements {
            builder = builder.xml_break_element(name.as_str());
        }
        let mut config = builder.build();
        config
            .tokens_to_discard
            .extend(self.tokens_to_discard.iter().cloned());

        Ok(config)
    }
}

/// Load a configuration file, or the defaults when no file is given
pub fn load_config(path: Option<&Path>) -> Result<SegmenterConfig> {
    match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            SegmenterConfig::from_file(path)
                .map_err(CliError::from)
                .with_context(|| format!("Failed to load configuration: {}", path.display()))
        }
        None => Ok(SegmenterConfig::default()),
    }
}

/// Resolve the effective configuration: defaults < file < flags
pub fn resolve(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<SegmenterConfig> {
    let config = overrides.apply(load_config(path)?)?;
    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}
