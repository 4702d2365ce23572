//! Parsed email and fragment types

use crate::classifier::is_blank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An email reply split into fragments, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    fragments: Vec<Fragment>,
}

impl Email {
    /// Build an email from fragments given bottom-up, as the builder emits them
    pub(crate) fn from_reversed(mut fragments: Vec<Fragment>) -> Self {
        fragments.reverse();
        Self { fragments }
    }

    /// All fragments, top to bottom
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Fragments a reader of the reply should see
    pub fn visible_fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| !f.is_hidden())
    }

    /// The new text of the reply, without quotes or signatures
    #[must_use]
    pub fn visible_text(&self) -> String {
        let visible: Vec<&str> = self.visible_fragments().map(Fragment::content).collect();
        visible.join("\n").trim_end().to_string()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    #[must_use]
    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }
}

impl<'a> IntoIterator for &'a Email {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

/// Shows the visible reply text only; hidden fragments are left out.
impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.visible_text())
    }
}

/// A contiguous block of lines sharing one classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FragmentData")]
pub struct Fragment {
    /// Raw text, top to bottom
    content: String,

    /// Part of a quoted earlier message
    quoted: bool,

    /// Trailing signature block
    signature: bool,

    /// Should be skipped when extracting the reply
    hidden: bool,
}

impl Fragment {
    /// Assemble a fragment from lines collected bottom-up.
    ///
    /// An empty first-collected line is the separator between this block and
    /// the one below it (or the end of input), so one trailing newline is
    /// dropped from the joined text.
    pub(crate) fn from_reversed_lines(lines: &[&str], quoted: bool, signature: bool) -> Self {
        let ordered: Vec<&str> = lines.iter().rev().copied().collect();

        let mut content = ordered.join("\n");
        if content.ends_with('\n') {
            content.pop();
        }

        Self::new(content, quoted, signature)
    }

    fn new(content: String, quoted: bool, signature: bool) -> Self {
        let hidden = quoted || signature || is_blank(&content);
        Self {
            content,
            quoted,
            signature,
            hidden,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    #[must_use]
    pub const fn is_signature(&self) -> bool {
        self.signature
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Check if the fragment holds only whitespace
    #[must_use]
    pub fn is_empty(&self) -> bool {
        is_blank(&self.content)
    }

    /// Lines of the fragment, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// Serialized form of a fragment; `hidden` is always recomputed on load
#[derive(Deserialize)]
struct FragmentData {
    content: String,
    #[serde(default)]
    quoted: bool,
    #[serde(default)]
    signature: bool,
}

impl From<FragmentData> for Fragment {
    fn from(data: FragmentData) -> Self {
        Self::new(data.content, data.quoted, data.signature)
    }
}
