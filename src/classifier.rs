//! Line classification rules
//!
//! Every predicate here looks at a single line in natural reading order.
//! Quote headers are configurable per parser; quote markers and signature
//! markers are fixed rule tables.

use crate::error::{ConfigError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Quote-header patterns used when the caller supplies none, tried in order
pub const DEFAULT_QUOTE_HEADERS: &[&str] = &[
    // On DATE, NAME <EMAIL> wrote:
    r"^On .+ wrote:$",
    // Le DATE, NAME <EMAIL> a écrit :
    r"^Le .+ écrit :$",
    // El DATE, NAME <EMAIL> escribió:
    r"^El .+ escribió:$",
    // W dniu DATE, NAME <EMAIL> pisze:
    r"^W dniu .+(pisze|napisał):$",
    // Den DATE skrev NAME <EMAIL>:
    r"^Den .+ skrev .+:$",
    // Am DATE um TIME schrieb NAME:
    r"^Am .+ um .+ schrieb .+:$",
    // NAME <EMAIL> schrieb:
    r"^.+ <.+> schrieb:$",
    // 2020-01-01 10:00 GMT+01:00 NAME <EMAIL>:
    r"^\d{4}-\d{2}-\d{2} \d{1,2}:\d{2} .+:$",
    // Il DATE, NAME <EMAIL> ha scritto:
    r"^Il .+ ha scritto:$",
    // Op DATE schreef NAME <EMAIL>:
    r"^Op .+ (schreef|geschreven).*:$",
    // Em DATE, NAME <EMAIL> escreveu:
    r"^Em .+ escreveu:$",
    // From: NAME <EMAIL>
    r"^(From|De|Van|Da) ?: ?.+[<\[].+[>\]]$",
];

static DEFAULT_HEADERS: LazyLock<QuoteHeaders> =
    LazyLock::new(|| QuoteHeaders::new(DEFAULT_QUOTE_HEADERS).unwrap());

static QUOTE_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*>+").unwrap());

/// A named line rule
struct LineRule {
    name: &'static str,
    regex: Regex,
}

impl LineRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

// Matched against the right-trimmed line, first hit wins.
static SIGNATURE_RULES: LazyLock<Vec<LineRule>> = LazyLock::new(|| {
    vec![
        LineRule::new("delimiter", r"^(?:--|__)$"),
        LineRule::new("hyphenated", r"\w-$"),
        LineRule::new("mobile", r"^Sent from my(?:\s+\w+){1,3}$"),
    ]
});

/// Ordered list of compiled quote-header patterns.
///
/// A line is a quote header when its trimmed text matches any pattern.
/// Patterns are validated when they are added, so a list that exists is
/// always usable.
#[derive(Debug, Clone)]
pub struct QuoteHeaders {
    patterns: Vec<Regex>,
}

impl QuoteHeaders {
    /// Compile a pattern list, failing on the first invalid pattern
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| compile_header(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Append a pattern after the existing ones
    pub fn push(&mut self, pattern: &str) -> Result<()> {
        self.patterns.push(compile_header(pattern)?);
        Ok(())
    }

    /// Check a line against every pattern
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        let line = line.trim();
        !line.is_empty() && self.patterns.iter().any(|p| p.is_match(line))
    }

    /// Pattern sources, in match order
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for QuoteHeaders {
    fn default() -> Self {
        DEFAULT_HEADERS.clone()
    }
}

fn compile_header(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigError::PatternSyntax {
        pattern: pattern.to_string(),
        source,
    })
}

/// Check if a line carries a `>` quote prefix
#[must_use]
pub fn is_quote_marker(line: &str) -> bool {
    QUOTE_MARKER_REGEX.is_match(line)
}

/// Check if a line opens a signature block
#[must_use]
pub fn is_signature_marker(line: &str) -> bool {
    signature_rule(line).is_some()
}

/// Name of the signature rule matching this line, if any
#[must_use]
pub fn signature_rule(line: &str) -> Option<&'static str> {
    let line = line.trim_end();
    SIGNATURE_RULES
        .iter()
        .find(|rule| rule.regex.is_match(line))
        .map(|rule| rule.name)
}

/// Check if a line holds nothing but whitespace
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
