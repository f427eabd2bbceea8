/// Browsing history: an ordered list of visited URLs plus a cursor
///
/// The cursor always points at the currently displayed entry. Pushing a new
/// URL while the cursor sits before the tail discards everything after the
/// cursor first, so `forward` never leads to a page the user navigated away
/// from.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    /// Index of the current entry; `None` until the first push
    current: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly visited URL and move the cursor to it
    ///
    /// Entries after the cursor are dropped before appending.
    pub fn push(&mut self, url: &str) {
        if let Some(index) = self.current {
            self.entries.truncate(index + 1);
        }
        self.entries.push(url.to_string());
        self.current = Some(self.entries.len() - 1);
        ::log::debug!(
            "history push: {} ({} entries)",
            url,
            self.entries.len()
        );
    }

    /// Move the cursor one entry back and return the URL there
    ///
    /// Fails softly with `None` when already at the oldest entry (or empty).
    pub fn back(&mut self) -> Option<&str> {
        let index = self.current?;
        if index == 0 {
            return None;
        }
        self.current = Some(index - 1);
        self.entries.get(index - 1).map(String::as_str)
    }

    /// Move the cursor one entry forward and return the URL there
    ///
    /// Fails softly with `None` when already at the newest entry (or empty).
    pub fn forward(&mut self) -> Option<&str> {
        let index = self.current?;
        if index + 1 >= self.entries.len() {
            return None;
        }
        self.current = Some(index + 1);
        self.entries.get(index + 1).map(String::as_str)
    }

    /// The URL at the cursor, if any page has been visited
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.current?).map(String::as_str)
    }

    /// Whether `back` would succeed
    pub fn can_go_back(&self) -> bool {
        matches!(self.current, Some(index) if index > 0)
    }

    /// Whether `forward` would succeed
    pub fn can_go_forward(&self) -> bool {
        matches!(self.current, Some(index) if index + 1 < self.entries.len())
    }

    /// All entries in visit order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Position of the cursor within `entries`
    pub fn cursor(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_has_no_current() {
        let mut history = History::new();
        assert_eq!(history.current(), None);
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), None);
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_push_sets_current() {
        let mut history = History::new();
        history.push("https://a.com");
        assert_eq!(history.current(), Some("https://a.com"));
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_back_then_forward_restores_current() {
        let mut history = History::new();
        history.push("https://a.com");
        history.push("https://b.com");
        history.push("https://c.com");

        assert_eq!(history.back(), Some("https://b.com"));
        assert_eq!(history.forward(), Some("https://c.com"));
        assert_eq!(history.current(), Some("https://c.com"));
    }

    #[test]
    fn test_back_stops_at_oldest_entry() {
        let mut history = History::new();
        history.push("https://a.com");
        history.push("https://b.com");

        assert_eq!(history.back(), Some("https://a.com"));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), Some("https://a.com"));
    }

    #[test]
    fn test_forward_stops_at_newest_entry() {
        let mut history = History::new();
        history.push("https://a.com");
        assert_eq!(history.forward(), None);
        assert_eq!(history.current(), Some("https://a.com"));
    }

    #[test]
    fn test_push_after_back_truncates_forward_entries() {
        let mut history = History::new();
        history.push("https://a.com");
        history.push("https://b.com");
        history.push("https://c.com");

        history.back();
        assert_eq!(history.current(), Some("https://b.com"));

        history.push("https://d.com");
        assert_eq!(history.forward(), None);
        assert_eq!(
            history.entries(),
            &[
                "https://a.com".to_string(),
                "https://b.com".to_string(),
                "https://d.com".to_string(),
            ]
        );
        assert_eq!(history.current(), Some("https://d.com"));
    }

    #[test]
    fn test_push_back_forward_round_trips_for_any_sequence() {
        let urls = ["https://a.com", "https://b.com", "https://c.com", "https://d.com"];
        let mut history = History::new();
        for url in urls {
            history.push(url);
            let before = history.current().map(str::to_string);
            if history.back().is_some() {
                history.forward();
            }
            assert_eq!(history.current().map(str::to_string), before);
        }
    }

    #[test]
    fn test_cursor_tracks_position() {
        let mut history = History::new();
        assert_eq!(history.cursor(), None);
        history.push("https://a.com");
        history.push("https://b.com");
        assert_eq!(history.cursor(), Some(1));
        history.back();
        assert_eq!(history.cursor(), Some(0));
    }
}
