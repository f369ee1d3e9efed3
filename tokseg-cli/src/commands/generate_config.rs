//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tokseg_core::config::defaults;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to match your tokenizer");
        println!("2. Validate your configuration:");
        println!("   tokseg validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   tokseg process -i tokens.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Template configuration content, spelling out every default
fn template() -> String {
    format!(
        r#"# tokseg segmenter configuration
# Every section and key is optional; omitted keys keep their defaults.

[boundaries]
# Tokens matching this regex (as a whole token) end a sentence
token_regex = '{boundary}'

# Tokens matching this regex stick to a sentence that just ended
follower_regex = '''{follower}'''

# Token sequences that end a sentence, one regex per token
multi_token_patterns = [
    # Example: ['\*', '\*', '\*'],
]

[discard]
# Exact tokens removed from the output
tokens = ["\n", "{placeholder}"]

# Tokens matching any of these regexes are removed from the output
regexes = [
    # Example: '<!--.*-->',
]

[markup]
# XML elements whose tags force a sentence break
break_elements = []

# Only segment tokens inside this XML element
# region_element = "text"

[newlines]
# Exact tokens recognized as newline markers
tokens = ["\n", "{placeholder}"]

# never | always | two (two consecutive newlines end a sentence)
policy = "never"

[mode]
# Emit every surviving token as one sentence
one_sentence = false

# Keep sentences that end up with no tokens
allow_empty_sentences = false
"#,
        boundary = defaults::BOUNDARY_REGEX,
        follower = defaults::BOUNDARY_FOLLOWER_REGEX,
        placeholder = defaults::NEWLINE_PLACEHOLDER,
    )
}
