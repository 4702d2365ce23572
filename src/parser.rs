//! Main reply parser implementation

use crate::builder::FragmentBuilder;
use crate::classifier::QuoteHeaders;
use crate::config::ParserConfig;
use crate::error::{ConfigError, Result};
use crate::markup::PlainTextConverter;
use crate::normalizer::{
    DEFAULT_HEADER_WRAP_LIMIT, join_wrapped_quote_headers, normalize_line_endings,
};
use crate::types::Email;
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT_PARSER: LazyLock<EmailReplyParser> = LazyLock::new(EmailReplyParser::new);

/// Parse a reply with the default quote-header patterns
#[must_use]
pub fn parse(text: &str) -> Email {
    DEFAULT_PARSER.parse(text)
}

/// Extract the visible reply text with the default quote-header patterns
#[must_use]
pub fn parse_reply(text: &str) -> String {
    DEFAULT_PARSER.parse(text).visible_text()
}

/// Splits email replies into fragments.
///
/// Each parser owns its quote-header patterns, so parsers configured for
/// different locales can run side by side. Parsing borrows the parser
/// immutably and never fails.
#[derive(Debug, Clone)]
pub struct EmailReplyParser {
    quote_headers: QuoteHeaders,
    header_wrap_limit: usize,
}

impl Default for EmailReplyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailReplyParser {
    /// Parser with the default quote-header patterns
    #[must_use]
    pub fn new() -> Self {
        Self {
            quote_headers: QuoteHeaders::default(),
            header_wrap_limit: DEFAULT_HEADER_WRAP_LIMIT,
        }
    }

    /// Parser with its own quote-header patterns replacing the defaults
    pub fn with_quote_headers<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            quote_headers: QuoteHeaders::new(patterns)?,
            header_wrap_limit: DEFAULT_HEADER_WRAP_LIMIT,
        })
    }

    /// Parser built from a validated configuration
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            quote_headers: QuoteHeaders::new(&config.quote_headers)?,
            header_wrap_limit: config.header_wrap_limit,
        })
    }

    #[must_use]
    pub const fn quote_headers(&self) -> &QuoteHeaders {
        &self.quote_headers
    }

    /// Replace the quote-header patterns
    pub fn set_quote_headers(&mut self, quote_headers: QuoteHeaders) {
        self.quote_headers = quote_headers;
    }

    /// Add a quote-header pattern after the existing ones
    pub fn add_quote_header(&mut self, pattern: &str) -> Result<()> {
        self.quote_headers.push(pattern)
    }

    #[must_use]
    pub const fn header_wrap_limit(&self) -> usize {
        self.header_wrap_limit
    }

    /// Set how many physical lines a wrapped quote header may span
    pub fn set_header_wrap_limit(&mut self, limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(ConfigError::InvalidHeaderWrapLimit(limit));
        }
        self.header_wrap_limit = limit;
        Ok(())
    }

    /// Split a plain-text reply into fragments
    #[must_use]
    pub fn parse(&self, text: &str) -> Email {
        let text = normalize_line_endings(text);
        let text = join_wrapped_quote_headers(&text, &self.quote_headers, self.header_wrap_limit);
        let email = FragmentBuilder::build(&self.quote_headers, &text);

        debug!(
            "Parsed reply into {} fragments ({} visible)",
            email.len(),
            email.visible_fragments().count()
        );

        email
    }

    /// Extract only the visible reply text
    #[must_use]
    pub fn parse_reply(&self, text: &str) -> String {
        self.parse(text).visible_text()
    }

    /// Split a markup reply, converted to plain text by `converter`
    #[must_use]
    pub fn parse_markup<C>(&self, markup: &str, truncate_at: Option<&str>, converter: &C) -> Email
    where
        C: PlainTextConverter + ?Sized,
    {
        self.parse(&converter.to_plain_text(markup, truncate_at))
    }
}
