use crate::commands::Command;
use crate::error::{BrowseError, NavigationError};
use crate::fetcher::Fetcher;
use crate::navigator::Navigator;
use crate::parsers::{self, ItemKind};
use crate::render::TextRenderer;
use crate::results::Page;

/// What the command loop should do after a command completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// An interactive browsing session
///
/// Owns the navigator, the currently displayed page and the fetcher, and
/// dispatches parsed commands. Commands are processed one at a time: a load
/// holds `&mut self` until fetch and extraction finish, so there is never an
/// in-flight page racing a newer one. The session is in one of three
/// implicit states: no page yet (`page` is `None`), a page loaded, or
/// transiently loading inside `load_page`.
pub struct Session<F: Fetcher> {
    fetcher: F,
    renderer: TextRenderer,
    navigator: Navigator,
    page: Option<Page>,
    home_url: String,
}

impl<F: Fetcher> Session<F> {
    pub fn new(fetcher: F, home_url: &str) -> Self {
        Self {
            fetcher,
            renderer: TextRenderer::new(),
            navigator: Navigator::new(),
            page: None,
            home_url: home_url.to_string(),
        }
    }

    /// The navigator owned by this session
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The currently displayed page, if any
    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    /// Load the initial page and surface any failure
    pub async fn start(&mut self, url: &str) {
        let result = self.load_page(url, true).await;
        self.report(result);
    }

    /// Fetch, extract and display a page
    ///
    /// `add_to_history` is false when replaying back/forward/reload, so the
    /// history cursor is left where the navigation operation put it. Session
    /// state is only touched after both fetch and extraction succeed: a
    /// failed load leaves the previous page, links and URL fully intact.
    pub async fn load_page(&mut self, url: &str, add_to_history: bool) -> Result<(), BrowseError> {
        self.renderer.render_loading(url);

        let fetched = self.fetcher.fetch(url).await?;
        let extraction = parsers::html::extract(&fetched.body, &fetched.final_url)?;

        ::log::info!(
            "loaded {} ({} items, {} links)",
            fetched.final_url,
            extraction.items.len(),
            extraction.links.len()
        );

        if add_to_history {
            self.navigator
                .set_current_page(&fetched.final_url, extraction.links.clone());
        } else {
            self.navigator
                .update_without_history(&fetched.final_url, extraction.links.clone());
        }

        let page = Page::new(
            extraction.title,
            extraction.items,
            extraction.links,
            fetched.body,
            fetched.final_url,
        );
        self.renderer
            .render_page(&page.title, &page.items, &page.links, &page.final_url);
        self.page = Some(page);

        Ok(())
    }

    /// Go back in history and re-load the page there
    pub async fn go_back(&mut self) -> Result<(), BrowseError> {
        let url = self
            .navigator
            .go_back()
            .ok_or(NavigationError::NoBackTarget)?;
        self.load_page(&url, false).await
    }

    /// Go forward in history and re-load the page there
    pub async fn go_forward(&mut self) -> Result<(), BrowseError> {
        let url = self
            .navigator
            .go_forward()
            .ok_or(NavigationError::NoForwardTarget)?;
        self.load_page(&url, false).await
    }

    /// Re-fetch the current page without touching history
    pub async fn reload(&mut self) -> Result<(), BrowseError> {
        let url = self
            .navigator
            .current_url()
            .map(str::to_string)
            .ok_or(NavigationError::NothingToReload)?;
        self.load_page(&url, false).await
    }

    /// Navigate to the home page
    pub async fn go_home(&mut self) -> Result<(), BrowseError> {
        let url = self.home_url.clone();
        self.load_page(&url, true).await
    }

    /// Follow a link of the current page by its index
    ///
    /// Following a link is a forward navigation and is recorded in history.
    pub async fn go_to_link(&mut self, index: usize) -> Result<(), BrowseError> {
        let url = self
            .navigator
            .link_by_index(index)
            .map(str::to_string)
            .ok_or(NavigationError::LinkNotFound {
                index,
                available: self.navigator.link_count(),
            })?;
        self.load_page(&url, true).await
    }

    /// Find content items containing `query`, in document order
    ///
    /// Pure: no session state changes.
    pub fn search(&self, query: &str, case_sensitive: bool) -> Vec<String> {
        let Some(page) = &self.page else {
            return Vec::new();
        };
        let needle = if case_sensitive {
            query.to_string()
        } else {
            query.to_lowercase()
        };
        page.items
            .iter()
            .filter(|item| item.kind != ItemKind::Newline)
            .filter(|item| {
                if case_sensitive {
                    item.text.contains(&needle)
                } else {
                    item.text.to_lowercase().contains(&needle)
                }
            })
            .map(|item| item.text.clone())
            .collect()
    }

    /// Parse and execute one line of user input
    pub async fn handle_command(&mut self, line: &str) -> ControlFlow {
        match Command::parse(line) {
            Command::Blank => {}
            Command::Quit => return ControlFlow::Quit,
            Command::Back => {
                let result = self.go_back().await;
                self.report(result);
            }
            Command::Forward => {
                let result = self.go_forward().await;
                self.report(result);
            }
            Command::Reload => {
                let result = self.reload().await;
                self.report(result);
            }
            Command::Home => {
                let result = self.go_home().await;
                self.report(result);
            }
            Command::Link(index) => {
                let result = self.go_to_link(index).await;
                self.report(result);
            }
            Command::Go(url) => {
                let result = self.load_page(&url, true).await;
                self.report(result);
            }
            Command::Search {
                query,
                case_sensitive,
            } => {
                let results = self.search(&query, case_sensitive);
                let label = if case_sensitive {
                    format!("{query} (case-sensitive)")
                } else {
                    format!("{query} (case-insensitive)")
                };
                self.renderer.render_search_results(&label, &results);
            }
            Command::Help => self.renderer.render_help(),
            Command::ShowUrl => match self.navigator.current_url() {
                Some(url) => self.renderer.render_message(&format!("current URL: {url}")),
                None => self.renderer.render_error("no page loaded yet"),
            },
            Command::History => {
                let history = self.navigator.history();
                self.renderer
                    .render_history(history.entries(), history.cursor());
            }
            Command::Links => self.renderer.render_links(self.navigator.links()),
            Command::Info => match &self.page {
                Some(page) => self.renderer.render_info(page),
                None => self.renderer.render_error("no page loaded"),
            },
            Command::Save => {
                let result = self.save_page();
                match result {
                    Ok(filename) => self
                        .renderer
                        .render_message(&format!("page saved to {filename}")),
                    Err(err) => self.renderer.render_error(&err.to_string()),
                }
            }
            Command::Source { full } => match &self.page {
                Some(page) => self.renderer.render_source(page, full),
                None => self.renderer.render_error("no page loaded to show source"),
            },
            Command::Clear => {
                self.renderer.clear_screen();
                if let Some(page) = &self.page {
                    self.renderer
                        .render_page(&page.title, &page.items, &page.links, &page.final_url);
                }
            }
            Command::Version => self
                .renderer
                .render_message(&format!("linkwalk {}", env!("CARGO_PKG_VERSION"))),
            Command::Unknown(input) => self.renderer.render_error(&format!(
                "unknown command '{input}', type '?' for help"
            )),
        }
        ControlFlow::Continue
    }

    /// Write the current page to a text file named after its title
    fn save_page(&self) -> Result<String, BrowseError> {
        let page = self.page.as_ref().ok_or(NavigationError::NoPage)?;
        let filename = crate::utils::filename_for_title(&page.title);

        let mut out = String::new();
        out.push_str(&format!("Title: {}\n", page.title));
        out.push_str(&format!("URL: {}\n", page.final_url));
        out.push_str(&format!("{}\n\n", "=".repeat(60)));

        for item in &page.items {
            match item.kind {
                ItemKind::Heading => {
                    out.push_str(&format!(
                        "\n{} {}\n",
                        "#".repeat(item.level.max(1) as usize),
                        item.text
                    ));
                }
                ItemKind::Newline => out.push('\n'),
                _ => out.push_str(&format!("{}\n", item.text)),
            }
        }

        out.push_str(&format!("\n{}\n", "=".repeat(60)));
        out.push_str(&format!("\nLinks ({}):\n", page.links.len()));
        for link in &page.links {
            out.push_str(&format!("[{}] {}\n    {}\n", link.index, link.text, link.url));
        }

        std::fs::write(&filename, out)?;
        ::log::info!("saved page to {}", filename);
        Ok(filename)
    }

    /// Surface an operation's failure to the user, if it failed
    fn report(&self, result: Result<(), BrowseError>) {
        if let Err(err) = result {
            ::log::debug!("command failed: {}", err);
            self.renderer.render_error(&err.to_string());
        }
    }
}
