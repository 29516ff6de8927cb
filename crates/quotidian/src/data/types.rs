//! Core data types
//!
//! The quote value type and its identity and presentation rules.

use serde::{Deserialize, Serialize};

/// Author shown when a quote carries no attribution
pub const FALLBACK_AUTHOR: &str = "Anonymous";

/// A quote: a text/author pair, the unit of favoriting
///
/// Two quotes are the same quote iff `text` and `author` are exactly equal
/// (case-sensitive, no normalization). The derived `PartialEq` is that
/// identity rule; there is no separate unique identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    /// The quote body (non-empty)
    pub text: String,
    /// Attribution; may be empty, display falls back to [`FALLBACK_AUTHOR`]
    #[serde(default)]
    pub author: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Author for display, substituting the fallback for empty attribution
    pub fn display_author(&self) -> &str {
        if self.author.is_empty() {
            FALLBACK_AUTHOR
        } else {
            &self.author
        }
    }

    /// The clipboard/share line: `"<text>" — <author or "Anonymous">`
    pub fn share_text(&self) -> String {
        format!("\"{}\" — {}", self.text, self.display_author())
    }
}
