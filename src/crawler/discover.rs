//! Navigation link discovery
//!
//! Builds the ordered candidate list for a crawl from a page's primary
//! navigation: the start URL first, then one candidate per `a[href]` inside
//! the first `<nav>` landmark, in document order. The list may contain
//! duplicates; the crawler's visited set resolves them.

use scraper::{Html, Selector};
use url::Url;

/// Discovers candidate URLs to visit from a parsed document
///
/// The start URL is always the first candidate. Hrefs that are already
/// absolute URLs are appended as-is; everything else is treated as a
/// site-relative path and joined onto the start URL with one trailing
/// slash stripped. A document without a `<nav>` yields just the start URL.
///
/// # Arguments
///
/// * `start_url` - The URL the document was fetched from
/// * `document` - The parsed document
///
/// # Returns
///
/// An ordered, possibly duplicate-containing candidate list, never empty
pub fn discover_candidates(start_url: &str, document: &Html) -> Vec<String> {
    let mut candidates = vec![start_url.to_string()];

    let base = start_url.strip_suffix('/').unwrap_or(start_url);

    let nav_selector = match Selector::parse("nav") {
        Ok(s) => s,
        Err(_) => return candidates,
    };
    let anchor_selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return candidates,
    };

    if let Some(nav) = document.select(&nav_selector).next() {
        for anchor in nav.select(&anchor_selector) {
            if let Some(href) = anchor.value().attr("href") {
                candidates.push(resolve_candidate(base, href));
            }
        }
    }

    candidates
}

/// Joins an href onto the base URL unless it already carries a scheme.
/// Relative paths without a leading slash still concatenate verbatim; the
/// crawler surfaces those as invalid-URL skips rather than guessing.
fn resolve_candidate(base: &str, href: &str) -> String {
    if Url::parse(href).is_ok() {
        href.to_string()
    } else {
        format!("{}{}", base, href)
    }
}
