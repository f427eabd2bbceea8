use thiserror::Error;

use crate::fetcher::FetchError;
use crate::parsers::ParseError;

/// Errors raised by navigation operations that have no valid target.
///
/// These are purely local: they never touch page or navigator state, and the
/// command loop surfaces them as plain messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// There is no earlier history entry to go back to.
    #[error("cannot go back: no previous page")]
    NoBackTarget,

    /// There is no later history entry to go forward to.
    #[error("cannot go forward: no next page")]
    NoForwardTarget,

    /// Reload was requested before any page was loaded.
    #[error("no page to reload")]
    NothingToReload,

    /// A link index outside the current page's link list was requested.
    #[error("link [{index}] not found, valid range 1..{available}")]
    LinkNotFound { index: usize, available: usize },

    /// An operation needed a loaded page and none exists.
    #[error("no page loaded")]
    NoPage,
}

/// The error type for browser session operations.
///
/// Every variant is recoverable: the session keeps the previously displayed
/// page and the user can retry or navigate elsewhere.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// The page could not be fetched (transport or HTTP status failure).
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The fetched markup could not be parsed.
    #[error("failed to parse page: {0}")]
    Parse(#[from] ParseError),

    /// A navigation operation had no valid target.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Writing a saved page to disk failed.
    #[error("could not save page: {0}")]
    Save(#[from] std::io::Error),
}
