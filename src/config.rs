//! Parser configuration

use crate::classifier::DEFAULT_QUOTE_HEADERS;
use crate::error::{ConfigError, Result};
use crate::normalizer::DEFAULT_HEADER_WRAP_LIMIT;
use serde::{Deserialize, Serialize};

/// Settings for an [`EmailReplyParser`](crate::EmailReplyParser).
///
/// Missing fields fall back to the defaults, so a configuration file only
/// has to name what it changes:
///
/// ```json
/// { "quote_headers": ["^On .+ wrote:$", "^Op .+ schreef .+:$"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Quote-header patterns, tried in order
    pub quote_headers: Vec<String>,

    /// Maximum number of physical lines a wrapped quote header may span
    pub header_wrap_limit: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            quote_headers: DEFAULT_QUOTE_HEADERS
                .iter()
                .map(ToString::to_string)
                .collect(),
            header_wrap_limit: DEFAULT_HEADER_WRAP_LIMIT,
        }
    }
}

impl ParserConfig {
    /// Decode a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that the type system does not
    pub fn validate(&self) -> Result<()> {
        if self.header_wrap_limit == 0 {
            return Err(ConfigError::InvalidHeaderWrapLimit(self.header_wrap_limit));
        }
        Ok(())
    }
}
