//! Bottom-up fragment detection

use crate::classifier::{QuoteHeaders, is_blank, is_quote_marker, signature_rule};
use crate::types::{Email, Fragment};
use tracing::trace;

/// Fragment being collected, lines in reverse document order
#[derive(Debug)]
struct WorkingFragment<'a> {
    lines: Vec<&'a str>,
    quoted: bool,
    signature: bool,
}

impl<'a> WorkingFragment<'a> {
    const fn new(quoted: bool) -> Self {
        Self {
            lines: Vec::new(),
            quoted,
            signature: false,
        }
    }

    /// Most recently collected line, i.e. the topmost one so far
    fn last_line(&self) -> &'a str {
        self.lines.last().copied().unwrap_or_default()
    }
}

/// State machine turning normalized text into fragments.
///
/// Lines are fed from the bottom of the message to the top. Signatures and
/// quote headers sit at the top of the block they introduce, so a block can
/// be closed as soon as the line above it is seen.
pub(crate) struct FragmentBuilder<'a, 'h> {
    headers: &'h QuoteHeaders,
    current: Option<WorkingFragment<'a>>,
    finished: Vec<Fragment>,
}

impl<'a, 'h> FragmentBuilder<'a, 'h> {
    pub(crate) const fn new(headers: &'h QuoteHeaders) -> Self {
        Self {
            headers,
            current: None,
            finished: Vec::new(),
        }
    }

    /// Split a whole normalized text into an email
    pub(crate) fn build(headers: &'h QuoteHeaders, text: &'a str) -> Email {
        let mut builder = Self::new(headers);
        for line in text.split('\n').rev() {
            builder.scan_line(line);
        }
        builder.finish()
    }

    /// Feed the next line, moving upwards through the message
    pub(crate) fn scan_line(&mut self, line: &'a str) {
        let quoted = is_quote_marker(line);

        if let Some(fragment) = self.current.as_mut() {
            let last = fragment.last_line();
            if let Some(rule) = signature_rule(last) {
                fragment.signature = true;
                self.close(rule);
            } else if is_blank(line) && self.headers.matches(last) {
                fragment.quoted = true;
                self.close("quote header");
            }
        }

        let continues = self
            .current
            .as_ref()
            .is_some_and(|fragment| self.belongs(fragment, line, quoted));

        if !continues {
            self.close("classification change");
        }

        self.current
            .get_or_insert_with(|| WorkingFragment::new(quoted))
            .lines
            .push(line);
    }

    /// Close the topmost fragment and assemble the email
    pub(crate) fn finish(mut self) -> Email {
        // Nothing above the topmost fragment will close it, so its signature
        // marker is checked here ("Sent from my iPhone" as the whole reply).
        if let Some(fragment) = self.current.as_mut()
            && signature_rule(fragment.last_line()).is_some()
        {
            fragment.signature = true;
        }
        self.close("start of message");

        Email::from_reversed(self.finished)
    }

    fn belongs(&self, fragment: &WorkingFragment<'_>, line: &str, quoted: bool) -> bool {
        fragment.quoted == quoted
            || (fragment.quoted && (is_blank(line) || self.headers.matches(line)))
    }

    fn close(&mut self, reason: &str) {
        if let Some(fragment) = self.current.take() {
            trace!(
                "Closing fragment ({}): {} lines, quoted={}, signature={}",
                reason,
                fragment.lines.len(),
                fragment.quoted,
                fragment.signature
            );
            self.finished.push(Fragment::from_reversed_lines(
                &fragment.lines,
                fragment.quoted,
                fragment.signature,
            ));
        }
    }
}
