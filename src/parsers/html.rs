use scraper::node::Node;
use scraper::{ElementRef, Html};
use url::Url;

use crate::parsers::{ContentItem, Extraction, ItemKind, Link, ParseError};

/// Elements whose entire subtree is invisible and must never reach output
const SKIPPED: &[&str] = &[
    "script", "style", "noscript", "template", "meta", "link", "base", "iframe", "svg", "canvas",
    "object", "embed",
];

/// Inline elements that continue the surrounding text run
const INLINE: &[&str] = &[
    "span", "em", "strong", "b", "i", "u", "s", "small", "code", "kbd", "samp", "var", "abbr",
    "cite", "q", "sup", "sub", "mark", "time", "wbr", "ins", "del", "dfn", "data", "bdi", "bdo",
];

/// Parses markup into typed content items and an indexed link list
///
/// The document tree is walked depth-first in document order. Headings,
/// paragraphs and list items become their own typed items; text outside those
/// containers is gathered into `Text` items; runs of pure whitespace collapse
/// into at most one `Newline`. Every anchor with a non-empty href that
/// resolves against `base_url` gets the next 1-based link index.
pub fn extract(markup: &str, base_url: &str) -> Result<Extraction, ParseError> {
    if markup.trim().is_empty() {
        return Err(ParseError::EmptyDocument);
    }

    let base = Url::parse(base_url).map_err(|source| ParseError::BaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    let doc = Html::parse_document(markup);
    let mut walker = Walker::new(&base);
    walker.walk(doc.root_element());
    walker.flush_inline();

    // Whitespace after the last piece of content is not a blank line.
    if matches!(walker.items.last(), Some(item) if item.kind == ItemKind::Newline) {
        walker.items.pop();
    }

    ::log::debug!(
        "extracted {} content items and {} links from {}",
        walker.items.len(),
        walker.links.len(),
        base_url
    );

    Ok(Extraction {
        title: walker.title,
        items: walker.items,
        links: walker.links,
    })
}

/// Accumulates content items and links during the document walk
struct Walker<'a> {
    base: &'a Url,
    title: String,
    items: Vec<ContentItem>,
    links: Vec<Link>,
    /// Pending run of inline text not yet emitted as a `Text` item
    inline: String,
}

impl<'a> Walker<'a> {
    fn new(base: &'a Url) -> Self {
        Self {
            base,
            title: String::new(),
            items: Vec::new(),
            links: Vec::new(),
            inline: String::new(),
        }
    }

    /// Walk the children of an element in document order
    fn walk(&mut self, el: ElementRef<'_>) {
        for child in el.children() {
            match child.value() {
                Node::Text(text) => self.on_text(&text.text),
                Node::Element(_) => {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        self.on_element(child_el);
                    }
                }
                // Comments, doctypes and processing instructions are not content.
                _ => {}
            }
        }
    }

    fn on_element(&mut self, el: ElementRef<'_>) {
        let name = el.value().name();
        if SKIPPED.contains(&name) {
            return;
        }

        match name {
            "title" => {
                // First title element wins; later ones are ignored.
                if self.title.is_empty() {
                    self.title = text_of(el);
                }
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush_inline();
                let text = self.block_text(el);
                if !text.is_empty() {
                    self.items.push(ContentItem::heading(heading_level(name), text));
                }
            }
            "p" => {
                self.flush_inline();
                let text = self.block_text(el);
                if !text.is_empty() {
                    self.items.push(ContentItem::paragraph(text));
                }
            }
            "li" => {
                self.flush_inline();
                let text = self.block_text(el);
                if !text.is_empty() {
                    self.items.push(ContentItem::list_item(text));
                }
            }
            "br" | "hr" => {
                self.flush_inline();
                self.push_newline();
            }
            "a" => {
                // An anchor in flowing text contributes its visible text to
                // the surrounding run in addition to the link entry.
                let text = self.record_anchor(el);
                if !text.is_empty() {
                    self.inline.push_str(&text);
                    self.inline.push(' ');
                }
            }
            _ if INLINE.contains(&name) => self.walk(el),
            _ => {
                // Block-level container: it terminates any pending text run.
                self.flush_inline();
                self.walk(el);
                self.flush_inline();
            }
        }
    }

    fn on_text(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            if self.inline.trim().is_empty() {
                // Whitespace between blocks becomes at most one blank line.
                self.inline.clear();
                self.push_newline();
            } else {
                self.inline.push(' ');
            }
        } else {
            self.inline.push_str(raw);
            self.inline.push(' ');
        }
    }

    /// Emit the pending inline run as a `Text` item, if it has any content
    fn flush_inline(&mut self) {
        let text = collapse(&self.inline);
        self.inline.clear();
        if !text.is_empty() {
            self.items.push(ContentItem::text(text));
        }
    }

    /// Append a `Newline` item unless one is already last
    ///
    /// Leading blank lines are suppressed as well: a page never starts with
    /// a `Newline`.
    fn push_newline(&mut self) {
        if matches!(self.items.last(), Some(item) if item.kind != ItemKind::Newline) {
            self.items.push(ContentItem::newline());
        }
    }

    /// Collect the collapsed text of a block element, recording any anchors
    /// found inside it along the way
    fn block_text(&mut self, el: ElementRef<'_>) -> String {
        let mut buf = String::new();
        self.collect_block(el, &mut buf);
        collapse(&buf)
    }

    fn collect_block(&mut self, el: ElementRef<'_>, buf: &mut String) {
        for child in el.children() {
            match child.value() {
                Node::Text(text) => buf.push_str(&text.text),
                Node::Element(element) => {
                    let name = element.name();
                    if SKIPPED.contains(&name) {
                        continue;
                    }
                    let Some(child_el) = ElementRef::wrap(child) else {
                        continue;
                    };
                    if name == "a" {
                        let text = self.record_anchor(child_el);
                        buf.push_str(&text);
                    } else if name == "br" {
                        buf.push(' ');
                    } else {
                        self.collect_block(child_el, buf);
                        if !INLINE.contains(&name) {
                            buf.push(' ');
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Register a link for an anchor element and return its visible text
    ///
    /// Every anchor with a non-empty href that resolves to an absolute URL is
    /// indexed, duplicates included: each occurrence is independently
    /// navigable. Anchors whose target cannot be resolved only contribute
    /// their text.
    fn record_anchor(&mut self, el: ElementRef<'_>) -> String {
        let text = text_of(el);

        let Some(href) = el.value().attr("href") else {
            return text;
        };
        let href = href.trim();
        if href.is_empty() {
            return text;
        }

        match self.base.join(href) {
            Ok(resolved) => {
                let index = self.links.len() + 1;
                let link_text = if text.is_empty() {
                    resolved.to_string()
                } else {
                    text.clone()
                };
                self.links.push(Link {
                    index,
                    text: link_text,
                    url: resolved.to_string(),
                });
            }
            Err(err) => {
                ::log::debug!("skipping unresolvable href '{}': {}", href, err);
            }
        }

        text
    }
}

/// Collapsed visible text of an element's subtree, links not recorded
fn text_of(el: ElementRef<'_>) -> String {
    let mut buf = String::new();
    gather_text(el, &mut buf);
    collapse(&buf)
}

fn gather_text(el: ElementRef<'_>, buf: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => buf.push_str(&text.text),
            Node::Element(element) => {
                if SKIPPED.contains(&element.name()) {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    gather_text(child_el, buf);
                    if !INLINE.contains(&element.name()) && element.name() != "a" {
                        buf.push(' ');
                    }
                }
            }
            _ => {}
        }
    }
}

/// Collapse all whitespace runs to single spaces and trim the ends
fn collapse(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn heading_level(name: &str) -> u8 {
    // Caller only passes h1 through h6.
    name.as_bytes()[1] - b'0'
}
