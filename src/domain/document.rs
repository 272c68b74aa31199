//! Head section lookup in full HTML documents

use crate::domain::head::tag::ascii_caseless;
use regex::Regex;
use std::sync::OnceLock;

fn head_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let head = ascii_caseless("head");
        Regex::new(&format!(r"(?s)<{0}[^>]*>(.*?)</{0}>", head)).unwrap()
    })
}

/// Inner markup of the first `<head>` block, if the document has one
pub fn head_content(document: &str) -> Option<&str> {
    head_regex()
        .captures(document)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Head fragment to inspect: the `<head>` inner markup, or the whole text when
/// there is no `<head>` block.
///
/// Merging never uses this fallback; a page without `<head>` is left alone.
pub fn head_fragment(document: &str) -> &str {
    head_content(document).unwrap_or(document)
}
