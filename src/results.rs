use serde::{Deserialize, Serialize};

use crate::parsers::{ContentItem, Link};

/// A fully loaded page as displayed to the user
///
/// Replaced wholesale on every successful load; a failed load leaves the
/// previous page in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Document title, empty when the page has none
    pub title: String,

    /// Extracted content in reading order
    pub items: Vec<ContentItem>,

    /// Links in discovery order, indexed from 1
    pub links: Vec<Link>,

    /// Raw markup as received, for the source view and saving
    pub html_source: String,

    /// Post-redirect URL the page was actually served from
    pub final_url: String,
}

impl Page {
    /// Create a new page instance
    pub fn new(
        title: String,
        items: Vec<ContentItem>,
        links: Vec<Link>,
        html_source: String,
        final_url: String,
    ) -> Self {
        Self {
            title,
            items,
            links,
            html_source,
            final_url,
        }
    }
}
