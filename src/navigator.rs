use crate::history::History;
use crate::parsers::Link;

/// Tracks where the user is and which links the displayed page offers
///
/// Owns the session's one `History` plus the current page's URL and link
/// list. The link list is replaced wholesale on every page transition; link
/// indices therefore always refer to the page presently on screen.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    history: History,
    current_url: Option<String>,
    current_links: Vec<Link>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward navigation: push onto history and replace the
    /// current page's URL and links
    pub fn set_current_page(&mut self, url: &str, links: Vec<Link>) {
        self.history.push(url);
        self.current_url = Some(url.to_string());
        self.current_links = links;
    }

    /// Replace the current page without touching history
    ///
    /// Used when replaying back/forward/reload; pushing here would corrupt
    /// the history cursor.
    pub fn update_without_history(&mut self, url: &str, links: Vec<Link>) {
        self.current_url = Some(url.to_string());
        self.current_links = links;
    }

    /// Move the history cursor back and return the URL to re-load
    pub fn go_back(&mut self) -> Option<String> {
        self.history.back().map(str::to_string)
    }

    /// Move the history cursor forward and return the URL to re-load
    pub fn go_forward(&mut self) -> Option<String> {
        self.history.forward().map(str::to_string)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// URL of the page presently displayed, if any
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Look up a link of the current page by its user-facing index
    ///
    /// Matches on the link's `index` field rather than list position.
    /// Indices are contiguous from 1 as an extraction invariant, but the
    /// field lookup keeps this robust if that ever drifts.
    pub fn link_by_index(&self, index: usize) -> Option<&str> {
        self.current_links
            .iter()
            .find(|link| link.index == index)
            .map(|link| link.url.as_str())
    }

    /// Links of the current page, in display order
    pub fn links(&self) -> &[Link] {
        &self.current_links
    }

    pub fn link_count(&self) -> usize {
        self.current_links.len()
    }

    /// The underlying history, for display
    pub fn history(&self) -> &History {
        &self.history
    }
}
