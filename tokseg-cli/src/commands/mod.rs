//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

use crate::input::InputFormat;
use tokseg_core::NewlinePolicy;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment token files into sentences
    Process(process::ProcessArgs),

    /// Validate a segmenter configuration file
    Validate(validate::ValidateArgs),

    /// Generate a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List input and output formats
    Formats,

    /// List newline policies
    NewlinePolicies,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        print!("{}", self.render());
        Ok(())
    }

    fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Formats => {
                out.push_str("Input formats:\n");
                for format in InputFormat::ALL {
                    out.push_str(&format!("  {:<12} {}\n", format.name(), format.description()));
                }
                out.push_str("\nOutput formats:\n");
                out.push_str("  text         one sentence per line, tokens joined by spaces\n");
                out.push_str("  json         JSON array of sentences with file, index and tokens\n");
                out.push_str("  markdown     numbered list with a sentence count\n");
            }
            ListCommands::NewlinePolicies => {
                out.push_str("Newline policies:\n");
                for policy in NewlinePolicy::ALL {
                    let description = match policy {
                        NewlinePolicy::Never => "newlines are discarded (default)",
                        NewlinePolicy::Always => "every newline ends a sentence",
                        NewlinePolicy::TwoConsecutive => "two newlines in a row end a sentence",
                    };
                    out.push_str(&format!("  {:<16} {}\n", policy.as_str(), description));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_formats() {
        let listing = ListCommands::Formats.render();
        for name in ["lines", "whitespace", "json", "text", "markdown"] {
            assert!(listing.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_list_newline_policies() {
        let listing = ListCommands::NewlinePolicies.render();
        assert!(listing.contains("never"));
        assert!(listing.contains("always"));
        assert!(listing.contains("two_consecutive"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::NewlinePolicies,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("NewlinePolicies"));
    }
}
