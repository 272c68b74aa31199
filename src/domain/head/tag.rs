//! Head tags and their identity keys

use regex::Regex;
use std::sync::OnceLock;

/// Regex for the element name: the first `<word` in the markup
fn name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<([A-Za-z0-9_]+)").unwrap())
}

/// Regex source matching `word` with ASCII-only case folding.
///
/// `(?i)` folds Unicode too (U+212A KELVIN SIGN matches `k`), which HTML
/// element and attribute names never do.
pub(crate) fn ascii_caseless(word: &str) -> String {
    word.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                format!("[{}{}]", c.to_ascii_uppercase(), c.to_ascii_lowercase())
            } else {
                regex::escape(&c.to_string())
            }
        })
        .collect()
}

fn attribute_regex(attr: &str) -> Regex {
    Regex::new(&format!(r#"{}=["']([^"']+)["']"#, ascii_caseless(attr))).unwrap()
}

fn meta_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| attribute_regex("name"))
}

fn meta_property_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| attribute_regex("property"))
}

fn meta_http_equiv_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| attribute_regex("http-equiv"))
}

fn link_rel_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| attribute_regex("rel"))
}

fn link_href_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| attribute_regex("href"))
}

/// First captured attribute value, case preserved
fn attribute<'a>(regex: &Regex, markup: &'a str) -> Option<&'a str> {
    regex
        .captures(markup)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Lowercased element name of a markup fragment
pub fn tag_name(markup: &str) -> Option<String> {
    name_regex()
        .captures(markup)
        .map(|cap| cap[1].to_ascii_lowercase())
}

/// Derive the identity key used to decide whether two tags declare the same thing.
///
/// Returns `None` for unkeyed tags, which are never deduplicated.
///
/// # Examples
///
/// ```
/// use headmerge::domain::head::identity_key;
///
/// assert_eq!(
///     identity_key(r#"<meta name="description" content="x">"#).as_deref(),
///     Some("meta:name:description")
/// );
/// assert_eq!(identity_key(r#"<meta charset="UTF-8">"#), None);
/// assert_eq!(identity_key("<title>Home</title>").as_deref(), Some("title"));
/// ```
pub fn identity_key(markup: &str) -> Option<String> {
    let name = tag_name(markup)?;

    match name.as_str() {
        "meta" => {
            if let Some(value) = attribute(meta_name_regex(), markup) {
                return Some(format!("meta:name:{}", value));
            }
            if let Some(value) = attribute(meta_property_regex(), markup) {
                return Some(format!("meta:property:{}", value));
            }
            attribute(meta_http_equiv_regex(), markup)
                .map(|value| format!("meta:http-equiv:{}", value))
        }
        "link" => {
            let rel = attribute(link_rel_regex(), markup)?;
            match attribute(link_href_regex(), markup) {
                Some(href) => Some(format!("link:rel:{}:href:{}", rel, href)),
                None => Some(format!("link:rel:{}", rel)),
            }
        }
        "title" => Some("title".to_string()),
        "style" => Some("style:inline".to_string()),
        other => Some(format!("tag:{}", other)),
    }
}

/// A single head element as it appeared in source, plus its identity key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    markup: String,
    key: Option<String>,
}

impl Tag {
    /// Build a tag from raw markup, deriving its identity key
    pub fn new(markup: impl Into<String>) -> Self {
        let markup = markup.into();
        let key = identity_key(&markup);
        Tag { markup, key }
    }

    /// The exact fragment text
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn identity_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn is_keyed(&self) -> bool {
        self.key.is_some()
    }

    /// Case-insensitive substring test against the raw markup
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.markup.to_ascii_lowercase().contains(needle)
    }
}
