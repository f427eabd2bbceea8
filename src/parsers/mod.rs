pub mod html;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kinds of content items produced by extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// A heading element; `level` carries its depth (1 = most prominent)
    Heading,
    /// A paragraph of text
    Paragraph,
    /// A single list entry
    ListItem,
    /// Bare text that appeared outside any paragraph or list
    Text,
    /// A blank line separating content
    Newline,
}

/// One semantic unit of extracted page content
///
/// Items are ordered in document reading order; `level` is only meaningful
/// for headings and is 0 otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub kind: ItemKind,
    pub text: String,
    pub level: u8,
}

impl ContentItem {
    /// Create a heading item with the given depth (1-6)
    pub fn heading(level: u8, text: String) -> Self {
        Self {
            kind: ItemKind::Heading,
            text,
            level,
        }
    }

    /// Create a paragraph item
    pub fn paragraph(text: String) -> Self {
        Self {
            kind: ItemKind::Paragraph,
            text,
            level: 0,
        }
    }

    /// Create a list item
    pub fn list_item(text: String) -> Self {
        Self {
            kind: ItemKind::ListItem,
            text,
            level: 0,
        }
    }

    /// Create a bare text item
    pub fn text(text: String) -> Self {
        Self {
            kind: ItemKind::Text,
            text,
            level: 0,
        }
    }

    /// Create a blank-line item
    pub fn newline() -> Self {
        Self {
            kind: ItemKind::Newline,
            text: String::new(),
            level: 0,
        }
    }
}

/// A navigable link discovered during extraction
///
/// `index` is 1-based and assigned in document order; it is the number the
/// user types to follow the link. `url` is always absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub index: usize,
    pub text: String,
    pub url: String,
}

/// Everything extracted from one page of markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The document title, trimmed; empty when the page has none
    pub title: String,
    /// Content items in reading order
    pub items: Vec<ContentItem>,
    /// Links in discovery order, indexed from 1
    pub links: Vec<Link>,
}

/// Errors raised when markup cannot be extracted at all
///
/// Malformed-but-recoverable markup never errors; the walk extracts whatever
/// structure the parser managed to build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained nothing to tokenize.
    #[error("nothing to parse: document is empty")]
    EmptyDocument,

    /// The base URL links are resolved against is itself invalid.
    #[error("invalid base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },
}
