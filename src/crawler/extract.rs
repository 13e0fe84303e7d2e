//! Structural page extraction
//!
//! Pulls the title, header texts, and paragraph texts out of a parsed
//! document. Missing elements degrade to empty values; nothing here fails.

use scraper::{Html, Selector};
use serde::Serialize;

/// Raw structural extraction of one page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// Text of the first `<title>` element, empty if none
    pub title: String,

    /// Text of every `<h1>`..`<h5>` element, in document order
    pub headers: Vec<String>,

    /// Text of every `<p>` element, in document order
    pub paragraphs: Vec<String>,
}

/// Extracts the structural text of a parsed document
///
/// Header and paragraph segments have newline, carriage-return, and tab
/// characters stripped; the title is trimmed.
pub fn extract_page(document: &Html) -> PageRecord {
    PageRecord {
        title: extract_title(document),
        headers: extract_segments(document, "h1, h2, h3, h4, h5"),
        paragraphs: extract_segments(document, "p"),
    }
}

/// Text of the first `<title>` element, or empty
fn extract_title(document: &Html) -> String {
    let selector = match Selector::parse("title") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Collects the text of every element matching `selectors`, in document
/// order, with control whitespace stripped from each segment.
fn extract_segments(document: &Html, selectors: &str) -> Vec<String> {
    let selector = match Selector::parse(selectors) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(|element| strip_control_whitespace(&element.text().collect::<String>()))
        .collect()
}

fn strip_control_whitespace(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t'))
        .collect()
}
