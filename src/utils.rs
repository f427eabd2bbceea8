use regex::Regex;
use url::Url;

/// Ensure a URL has a scheme, defaulting bare domains to https
///
/// User input like `wikipedia.org` is not a valid absolute URL; prepending
/// a scheme makes it fetchable. Already-absolute URLs pass through untouched.
pub fn ensure_scheme(url: &str) -> String {
    let trimmed = url.trim();
    match Url::parse(trimmed) {
        Ok(_) => trimmed.to_string(),
        Err(_) => format!("https://{trimmed}"),
    }
}

/// Derive a filesystem-safe `.txt` filename from a page title
///
/// Strips characters that are invalid in filenames, collapses whitespace and
/// dashes into underscores, and caps the stem length.
pub fn filename_for_title(title: &str) -> String {
    let mut stem = title.trim().to_string();

    if let Ok(strip) = Regex::new(r"[^\w\s-]") {
        stem = strip.replace_all(&stem, "").to_string();
    }
    if let Ok(collapse) = Regex::new(r"[-\s]+") {
        stem = collapse.replace_all(stem.trim(), "_").to_string();
    }

    if stem.is_empty() {
        stem = "untitled".to_string();
    }
    if stem.len() > 50 {
        let mut cut = 50;
        while !stem.is_char_boundary(cut) {
            cut -= 1;
        }
        stem.truncate(cut);
    }

    format!("{stem}.txt")
}
