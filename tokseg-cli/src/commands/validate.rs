//! Validate command implementation

use crate::config::load_config;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokseg_core::{ConfigFile, Segmenter};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,

    /// Print the effective configuration, defaults included
    #[arg(long)]
    pub show: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = load_config(Some(self.config.as_path())).and_then(|config| {
            Segmenter::new(config).context("Configuration does not compile")
        });

        let segmenter = match checked {
            Ok(segmenter) => segmenter,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                return Err(e.context("Validation failed"));
            }
        };

        let config = segmenter.config();
        println!("✓ Configuration is valid!");
        println!("  Newline policy: {}", config.newline_policy);
        println!("  Newline markers: {}", config.newline_tokens.len());
        println!(
            "  Region element: {}",
            config.region_element_name.as_deref().unwrap_or("(none)")
        );
        println!("  Break elements: {}", config.xml_break_element_names.len());
        println!("  Multi-token patterns: {}", config.multi_token_patterns.len());

        if self.show {
            let effective = toml::to_string_pretty(&ConfigFile::from(config))
                .context("Failed to render configuration")?;
            println!();
            print!("{effective}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_for(content: &str) -> (NamedTempFile, ValidateArgs) {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
            show: true,
        };
        (temp_file, args)
    }

    #[test]
    fn test_validate_valid_config() {
        let (_file, args) = args_for("[newlines]\npolicy = \"two\"\n[markup]\nregion_element = \"s\"\n");
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_bad_regex() {
        let (_file, args) = args_for("[boundaries]\ntoken_regex = \"[\"\n");
        let err = args.execute().unwrap_err();
        assert!(format!("{err:#}").contains("Invalid pattern"));
    }

    #[test]
    fn test_validate_unknown_key() {
        let (_file, args) = args_for("[mode]\nsentence_mode = true\n");
        assert!(args.execute().is_err());
    }
}
