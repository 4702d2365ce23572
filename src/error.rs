//! Error types for parser configuration

use thiserror::Error;

/// Errors raised while configuring a parser.
///
/// Parsing itself never fails; every problem surfaces here, before the
/// first message is parsed.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A quote-header pattern is not a valid regular expression
    #[error("Invalid quote header pattern {pattern:?}: {source}")]
    PatternSyntax {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration document could not be decoded
    #[error("Invalid parser configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Header wrap limit must allow at least one line
    #[error("Invalid header wrap limit: {0} (must be at least 1)")]
    InvalidHeaderWrapLimit(usize),
}

/// Result type for parser configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
