//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    NoInputFiles(Vec<String>),
    /// Input file that could not be turned into tokens
    MalformedInput { path: String, reason: String },
    /// Configuration error
    ConfigError(String),
    /// Segmentation error from core
    SegmentationError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "No files found matching: {}", patterns.join(", "))
            }
            CliError::MalformedInput { path, reason } => {
                write!(f, "Malformed input in {path}: {reason}")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SegmentationError(msg) => write!(f, "Segmentation error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<tokseg_core::Error> for CliError {
    fn from(err: tokseg_core::Error) -> Self {
        match err {
            tokseg_core::Error::UnsupportedToken { .. } => {
                CliError::SegmentationError(err.to_string())
            }
            other => CliError::ConfigError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
