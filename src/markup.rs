//! Seam for markup bodies.
//!
//! Converting HTML or other markup to plain text is left to the caller;
//! the reply parser only consumes the converted text.

/// Converts a markup body into the plain text the reply parser expects.
///
/// `truncate_at` names a marker after which the converter should drop the
/// rest of the document (for example a client's "original message" divider).
pub trait PlainTextConverter {
    fn to_plain_text(&self, markup: &str, truncate_at: Option<&str>) -> String;
}

impl<F> PlainTextConverter for F
where
    F: Fn(&str, Option<&str>) -> String,
{
    fn to_plain_text(&self, markup: &str, truncate_at: Option<&str>) -> String {
        self(markup, truncate_at)
    }
}
