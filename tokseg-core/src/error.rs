//! Error types for segmentation and configuration

use thiserror::Error;

/// Error type for tokseg operations
#[derive(Debug, Error)]
pub enum Error {
    /// Newline policy name that does not map to a policy
    #[error("Not a valid newline policy name: {0} (should be one of 'always', 'never', 'two')")]
    InvalidNewlinePolicy(String),

    /// A configured regular expression failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as written in the configuration
        pattern: String,
        /// The underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A token exposes no textual form
    #[error("Unsupported token at index {index}: cannot extract text from {kind}")]
    UnsupportedToken {
        /// Position of the offending token in the input
        index: usize,
        /// Description of the token representation
        kind: String,
    },
}

impl Error {
    pub(crate) fn pattern(pattern: &str, source: regex::Error) -> Self {
        Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Configuration(err.to_string())
    }
}

/// Result type for tokseg operations
pub type Result<T> = std::result::Result<T, Error>;
