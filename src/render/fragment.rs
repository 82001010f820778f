//! Formatter output types
//!
//! Every cell formatter returns a `CellFragment` tagged with a content kind
//! instead of mutating the host's column descriptor. The tag tells the host
//! renderer whether the string is finished markup to insert verbatim or
//! plain text it must escape itself.

use serde::{Deserialize, Serialize};

/// How the host should treat a formatter's output string
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// The host escapes the content before inserting it into the DOM
    PlainText,
    /// The content is already-sanitized markup, inserted verbatim
    Html,
}

/// One rendered list view cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CellFragment {
    /// Content kind tag consumed by the host renderer
    pub kind: ContentKind,

    /// The rendered string
    pub content: String,
}

impl CellFragment {
    /// Fragment carrying trusted, pre-escaped markup
    pub fn html(content: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Html,
            content: content.into(),
        }
    }

    /// Fragment carrying plain text the host must escape
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::PlainText,
            content: content.into(),
        }
    }

    /// Empty plain-text fragment, used when a field is absent
    pub fn empty() -> Self {
        Self::plain("")
    }

    /// Whether the fragment renders nothing
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
