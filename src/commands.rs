/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty input; the loop just re-prompts
    Blank,
    /// Terminate the session
    Quit,
    /// Go back in history
    Back,
    /// Go forward in history
    Forward,
    /// Re-fetch the current page
    Reload,
    /// Navigate to the home page
    Home,
    /// Show the command reference
    Help,
    /// Show the current URL
    ShowUrl,
    /// Show the browsing history
    History,
    /// List the current page's links
    Links,
    /// Show current page information
    Info,
    /// Show the version string
    Version,
    /// Clear the screen and redraw the current page
    Clear,
    /// Save the current page as a text file
    Save,
    /// Show the raw page source; `full` disables the preview cap
    Source { full: bool },
    /// Search the current page for a substring
    Search { query: String, case_sensitive: bool },
    /// Follow the link with this index
    Link(usize),
    /// Navigate to a URL
    Go(String),
    /// Anything that matched no command and does not look like a URL
    Unknown(String),
}

impl Command {
    /// Parse one line of user input into a command
    ///
    /// Keywords are case-insensitive. Input that matches no keyword is
    /// treated as a URL when it plausibly is one (an explicit scheme, or a
    /// dotted token without spaces), otherwise reported as unknown.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Blank;
        }

        let lower = trimmed.to_lowercase();
        match lower.as_str() {
            "q" | "quit" | "exit" => return Command::Quit,
            "b" | "back" => return Command::Back,
            "f" | "forward" => return Command::Forward,
            "r" | "reload" => return Command::Reload,
            "h" | "home" => return Command::Home,
            "?" | "help" => return Command::Help,
            "u" | "url" => return Command::ShowUrl,
            "history" => return Command::History,
            "links" => return Command::Links,
            "info" => return Command::Info,
            "version" => return Command::Version,
            "clear" => return Command::Clear,
            "save" => return Command::Save,
            "src" | "source" => return Command::Source { full: false },
            "src all" | "source all" => return Command::Source { full: true },
            _ => {}
        }

        // `//query` is case-sensitive search, `/query` case-insensitive.
        if let Some(query) = trimmed.strip_prefix("//") {
            let query = query.trim();
            if query.is_empty() {
                return Command::Blank;
            }
            return Command::Search {
                query: query.to_string(),
                case_sensitive: true,
            };
        }
        if let Some(query) = trimmed.strip_prefix('/') {
            let query = query.trim();
            if query.is_empty() {
                return Command::Blank;
            }
            return Command::Search {
                query: query.to_string(),
                case_sensitive: false,
            };
        }

        if lower.starts_with("go ") {
            let url = trimmed[3..].trim();
            if url.is_empty() {
                return Command::Blank;
            }
            return Command::Go(url.to_string());
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Command::Go(trimmed.to_string());
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(index) = trimmed.parse::<usize>() {
                return Command::Link(index);
            }
        }

        // A dotted token without spaces is probably a bare domain.
        if trimmed.contains('.') && !trimmed.contains(' ') {
            return Command::Go(trimmed.to_string());
        }

        Command::Unknown(trimmed.to_string())
    }
}
