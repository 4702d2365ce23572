// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::redundant_pub_crate)]

//! Email Reply Parser
//!
//! Splits the plain-text body of an email reply into fragments: the new
//! text written by the sender, quoted earlier messages, and signatures.
//!
//! # Features
//!
//! - Quote detection from `>` prefixes and localized quote headers
//!   ("On ... wrote:", "Le ... a écrit :", "Am ... um ... schrieb ...:", ...)
//! - Quote headers wrapped over several lines are recognized
//! - Signature detection (`--`, `__`, "Sent from my ...")
//! - Per-parser quote-header patterns, configurable from JSON
//!
//! # Example
//!
//! ```rust
//! use email_reply_parser::parse;
//!
//! let email = parse("Thanks!\n\nOn Jan 1, 2020, Bob wrote:\n> Ping?");
//!
//! assert_eq!(email.fragments().len(), 2);
//! assert!(email.fragments()[1].is_quoted());
//! assert_eq!(email.visible_text(), "Thanks!");
//! ```

mod builder;
mod classifier;
mod config;
mod error;
mod markup;
mod normalizer;
mod parser;
mod types;

pub use classifier::{
    DEFAULT_QUOTE_HEADERS, QuoteHeaders, is_blank, is_quote_marker, is_signature_marker,
    signature_rule,
};
pub use config::ParserConfig;
pub use error::{ConfigError, Result};
pub use markup::PlainTextConverter;
pub use normalizer::{
    DEFAULT_HEADER_WRAP_LIMIT, join_wrapped_quote_headers, normalize_line_endings,
};
pub use parser::{EmailReplyParser, parse, parse_reply};
pub use types::{Email, Fragment};
