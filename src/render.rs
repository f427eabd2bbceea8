use owo_colors::OwoColorize;

use crate::parsers::{ContentItem, ItemKind, Link};
use crate::results::Page;

/// Number of source lines shown by `src` before requiring `src all`
const SOURCE_PREVIEW_LINES: usize = 50;

/// Longest source line printed before clipping
const SOURCE_LINE_WIDTH: usize = 120;

/// Formats pages, messages and errors for the terminal
///
/// All formatting lives here; the session hands over extracted data and
/// error strings and never builds display text itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Announce that a page fetch is starting
    pub fn render_loading(&self, url: &str) {
        println!("\n{} {}", "Loading".cyan().bold(), url.dimmed());
    }

    /// Display a full page: title, URL, content items, then the link list
    pub fn render_page(&self, title: &str, items: &[ContentItem], links: &[Link], url: &str) {
        println!();
        if title.is_empty() {
            println!("{}", "(untitled)".dimmed().bold());
        } else {
            println!("{}", title.bold());
        }
        println!("{}", url.dimmed());
        println!("{}", "─".repeat(60).dimmed());

        for item in items {
            match item.kind {
                ItemKind::Heading => {
                    println!();
                    let marker = "#".repeat(item.level.max(1) as usize);
                    if item.level <= 1 {
                        println!("{} {}", marker.blue().bold(), item.text.bold().underline());
                    } else {
                        println!("{} {}", marker.blue().bold(), item.text.bold());
                    }
                }
                ItemKind::Paragraph => println!("{}", item.text),
                ItemKind::ListItem => println!("  {} {}", "•".yellow(), item.text),
                ItemKind::Text => println!("{}", item.text),
                ItemKind::Newline => println!(),
            }
        }

        if !links.is_empty() {
            println!();
            println!("{}", "─".repeat(60).dimmed());
            println!("{} ({})", "Links".bold(), links.len());
            for link in links {
                println!(
                    "  {} {}",
                    format!("[{}]", link.index).cyan().bold(),
                    link.text
                );
            }
        }
    }

    /// Display an error message
    pub fn render_error(&self, message: &str) {
        println!("{} {}", "✗".red().bold(), message.red());
    }

    /// Display a one-line status message
    pub fn render_message(&self, message: &str) {
        println!("{} {}", "ℹ".blue().bold(), message);
    }

    /// Display in-page search results in document order
    pub fn render_search_results(&self, query: &str, results: &[String]) {
        println!();
        println!(
            "{} {} ({} match{})",
            "Search:".bold(),
            query,
            results.len(),
            if results.len() == 1 { "" } else { "es" }
        );
        if results.is_empty() {
            println!("{}", "no matches on this page".dimmed());
            return;
        }
        for (number, text) in results.iter().enumerate() {
            println!("  {} {}", format!("{}.", number + 1).cyan(), text);
        }
    }

    /// Display the browsing history with a marker on the current entry
    pub fn render_history(&self, entries: &[String], cursor: Option<usize>) {
        println!();
        if entries.is_empty() {
            println!("{}", "no browsing history yet".dimmed());
            return;
        }
        println!("{} ({} pages)", "History".bold(), entries.len());
        for (position, url) in entries.iter().enumerate() {
            let marker = if Some(position) == cursor { "→" } else { " " };
            println!(
                "{} {} {}",
                marker.cyan().bold(),
                format!("{}.", position + 1).dimmed(),
                url
            );
        }
    }

    /// List every link of the current page
    pub fn render_links(&self, links: &[Link]) {
        println!();
        if links.is_empty() {
            println!("{}", "no links on this page".dimmed());
            return;
        }
        println!("{} ({} total)", "Links".bold(), links.len());
        for link in links {
            println!(
                "  {} {}",
                format!("[{}]", link.index).cyan().bold(),
                link.text
            );
            println!("      {}", link.url.dimmed());
        }
    }

    /// Display metadata about the current page
    pub fn render_info(&self, page: &Page) {
        println!();
        println!("{}", "Page information".bold());
        let title = if page.title.is_empty() {
            "(untitled)"
        } else {
            &page.title
        };
        println!("  Title: {}", title);
        println!("  URL: {}", page.final_url);
        println!("  Links: {}", page.links.len());
        println!("  Content items: {}", page.items.len());
        println!("  Source size: {} bytes", page.html_source.len());
    }

    /// Display the raw HTML source with line numbers
    ///
    /// A preview of the first lines unless `full` is set; long lines are
    /// clipped to keep the terminal readable.
    pub fn render_source(&self, page: &Page, full: bool) {
        let lines: Vec<&str> = page.html_source.lines().collect();
        let total = lines.len();

        println!();
        println!("{}", "Page source".bold());
        println!("  URL: {}", page.final_url);
        println!(
            "  {} lines, {} bytes",
            total,
            page.html_source.len()
        );
        println!("{}", "─".repeat(60).dimmed());

        let shown = if full {
            total
        } else {
            total.min(SOURCE_PREVIEW_LINES)
        };
        for (number, line) in lines.iter().take(shown).enumerate() {
            let mut line = (*line).to_string();
            if line.len() > SOURCE_LINE_WIDTH {
                let mut cut = SOURCE_LINE_WIDTH - 3;
                while !line.is_char_boundary(cut) {
                    cut -= 1;
                }
                line.truncate(cut);
                line.push_str("...");
            }
            println!("{} {}", format!("{:4} |", number + 1).dimmed(), line);
        }

        if shown < total {
            println!(
                "{}",
                format!("... {} more lines, type 'src all' to see everything", total - shown)
                    .dimmed()
            );
        }
    }

    /// Display the command reference
    pub fn render_help(&self) {
        println!();
        println!("{}", "Commands".bold());
        println!("  {}", "Navigation".underline());
        println!("    [number]      follow the link with that index");
        println!("    b, back       go back to the previous page");
        println!("    f, forward    go forward to the next page");
        println!("    r, reload     reload the current page");
        println!("    h, home       go to the home page");
        println!("    u, url        show the current URL");
        println!();
        println!("  {}", "Going places".underline());
        println!("    <url>         open an absolute URL (https://example.com)");
        println!("    <domain>      open a bare domain (example.com)");
        println!("    go <url>      same, spelled out");
        println!();
        println!("  {}", "Search & discovery".underline());
        println!("    /<query>      search the page, case-insensitive");
        println!("    //<query>     search the page, case-sensitive");
        println!("    links         list all links on the page");
        println!("    history       show the browsing history");
        println!("    info          show page information");
        println!();
        println!("  {}", "Utilities".underline());
        println!("    save          save the page as a text file");
        println!("    src, source   show the page source (src all for everything)");
        println!("    clear         clear the screen");
        println!("    version       show the version");
        println!("    ?, help       this help");
        println!("    q, quit, exit leave the browser");
    }

    /// Clear the terminal using ANSI escapes
    pub fn clear_screen(&self) {
        print!("\x1b[2J\x1b[H");
    }
}
