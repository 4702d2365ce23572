//! Text normalization run before fragment detection

use crate::classifier::{QuoteHeaders, is_blank, is_quote_marker};
use std::borrow::Cow;
use tracing::trace;

/// Default number of physical lines a wrapped quote header may span
pub const DEFAULT_HEADER_WRAP_LIMIT: usize = 3;

/// Convert `\r\n` and lone `\r` line endings to `\n`
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Collapse quote headers wrapped over several lines into one line.
///
/// Mail clients wrap long headers such as
/// `On Mon, Jan 1, 2020 at 10:00 AM, Bob <bob@example.com>\nwrote:`.
/// Starting at each line that is not already a header, up to `wrap_limit`
/// consecutive lines are tried; the shortest run whose lines, joined with a
/// single space, form a header is replaced by that joined line. Within that
/// run the header begins at the latest line that still forms one, so reply
/// text right above it stays separate. A run stops at blank lines, quoted
/// lines and lines that are headers on their own.
#[must_use]
pub fn join_wrapped_quote_headers(text: &str, headers: &QuoteHeaders, wrap_limit: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    if wrap_limit < 2 || headers.is_empty() || lines.len() < 2 {
        return text.to_string();
    }

    let mut output: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if is_blank(line) || is_quote_marker(line) || headers.matches(line) {
            output.push(Cow::Borrowed(line));
            i += 1;
            continue;
        }

        match wrapped_header_len(&lines[i..], headers, wrap_limit) {
            Some(len) => {
                let end = i + len;
                // Patterns opening with `.+` also match with the reply line
                // above glued on; the header starts at the latest line that
                // still forms one.
                let start = (i + 1..end - 1)
                    .rev()
                    .find(|&s| headers.matches(&lines[s..end].join(" ")))
                    .unwrap_or(i);

                output.extend(lines[i..start].iter().map(|line| Cow::Borrowed(*line)));

                let joined = lines[start..end].join(" ");
                trace!("Joined quote header over {} lines: {}", end - start, joined);
                output.push(Cow::Owned(joined));
                i = end;
            }
            None => {
                output.push(Cow::Borrowed(line));
                i += 1;
            }
        }
    }

    output.join("\n")
}

/// Length of the shortest run at the start of `lines` forming a header
fn wrapped_header_len(lines: &[&str], headers: &QuoteHeaders, wrap_limit: usize) -> Option<usize> {
    let mut joined = lines[0].to_string();

    for (offset, next) in lines.iter().enumerate().take(wrap_limit).skip(1) {
        if is_blank(next) || is_quote_marker(next) || headers.matches(next) {
            return None;
        }

        joined.push(' ');
        joined.push_str(next);

        if headers.matches(&joined) {
            return Some(offset + 1);
        }
    }

    None
}
