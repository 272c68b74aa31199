//! Tag extraction from head fragments
//!
//! Extraction runs one pattern per row of [`HEAD_PATTERNS`] and concatenates
//! the matches. Within a row matches keep source order, but rows are not
//! interleaved: every title comes before every meta, and so on.

use super::tag::ascii_caseless;
use super::Tag;
use regex::Regex;
use std::sync::OnceLock;

/// One row of the extraction table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPattern {
    /// Element name, matched case-insensitively
    pub name: &'static str,
    /// Paired elements capture everything up to the closing tag, across newlines
    pub paired: bool,
}

impl TagPattern {
    const fn paired(name: &'static str) -> Self {
        TagPattern { name, paired: true }
    }

    const fn void(name: &'static str) -> Self {
        TagPattern {
            name,
            paired: false,
        }
    }

    fn regex_source(&self) -> String {
        let name = ascii_caseless(self.name);
        if self.paired {
            format!(r"(?s)<{0}[^>]*>.*?</{0}>", name)
        } else {
            format!(r"<{}[^>]*/?>", name)
        }
    }
}

/// Head elements recognised by the merger, in extraction order
pub const HEAD_PATTERNS: [TagPattern; 6] = [
    TagPattern::paired("title"),
    TagPattern::void("meta"),
    TagPattern::void("link"),
    TagPattern::paired("style"),
    TagPattern::paired("script"),
    TagPattern::paired("noscript"),
];

fn compiled_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        HEAD_PATTERNS
            .iter()
            .map(|pattern| Regex::new(&pattern.regex_source()).unwrap())
            .collect()
    })
}

/// Extract every recognised tag from a head fragment
///
/// Never fails: markup that matches no pattern is dropped.
pub fn extract_tags(head: &str) -> Vec<Tag> {
    compiled_patterns()
        .iter()
        .flat_map(|regex| regex.find_iter(head))
        .map(|m| Tag::new(m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markups(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(|t| t.markup()).collect()
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract_tags("").is_empty());
        assert!(extract_tags("   \n  ").is_empty());
    }

    #[test]
    fn test_extract_buckets_by_pattern_not_position() {
        let head = r#"<script src="/a.js"></script>
    <link rel="icon" href="/favicon.ico">
    <meta name="author" content="Ada">
    <title>Home</title>"#;

        let tags = extract_tags(head);
        assert_eq!(
            markups(&tags),
            vec![
                "<title>Home</title>",
                r#"<meta name="author" content="Ada">"#,
                r#"<link rel="icon" href="/favicon.ico">"#,
                r#"<script src="/a.js"></script>"#,
            ]
        );
    }

    #[test]
    fn test_extract_preserves_order_within_bucket() {
        let head = r#"<meta name="a"><link rel="x"><meta name="b"><meta name="c">"#;
        let tags = extract_tags(head);
        assert_eq!(
            markups(&tags),
            vec![
                r#"<meta name="a">"#,
                r#"<meta name="b">"#,
                r#"<meta name="c">"#,
                r#"<link rel="x">"#,
            ]
        );
    }

    #[test]
    fn test_extract_self_closing_and_case_insensitive() {
        let tags = extract_tags(r#"<META charset="UTF-8" /><Link rel="stylesheet" href="/s.css"/>"#);
        assert_eq!(
            markups(&tags),
            vec![
                r#"<META charset="UTF-8" />"#,
                r#"<Link rel="stylesheet" href="/s.css"/>"#,
            ]
        );
    }

    #[test]
    fn test_extract_paired_bodies_span_lines() {
        let head = "<style>\n  body { color: red; }\n</style>\n<noscript>\n  <p>js off</p>\n</noscript>";
        let tags = extract_tags(head);
        assert_eq!(tags.len(), 2);
        assert!(tags[0].markup().starts_with("<style>"));
        assert!(tags[0].markup().contains("color: red"));
        assert!(tags[1].markup().ends_with("</noscript>"));
    }

    #[test]
    fn test_extract_paired_match_is_lazy() {
        let head = r#"<script src="/a.js"></script><script src="/b.js"></script>"#;
        let tags = extract_tags(head);
        assert_eq!(
            markups(&tags),
            vec![
                r#"<script src="/a.js"></script>"#,
                r#"<script src="/b.js"></script>"#,
            ]
        );
    }

    #[test]
    fn test_extract_drops_unclosed_paired_tags() {
        let tags = extract_tags("<title>Never closed");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_extract_name_case_folding_is_ascii_only() {
        // U+212A KELVIN SIGN and U+017F LATIN SMALL LETTER LONG S
        let head = "<lin\u{212A} rel=\"icon\"><\u{017F}tyle>p{}</\u{017F}tyle><LINK rel=\"x\">";
        let tags = extract_tags(head);
        assert_eq!(markups(&tags), vec![r#"<LINK rel="x">"#]);
    }

    #[test]
    fn test_extract_ignores_unknown_elements() {
        let tags = extract_tags(r#"<base href="/"><meta name="a">"#);
        assert_eq!(markups(&tags), vec![r#"<meta name="a">"#]);
    }

    #[test]
    fn test_pattern_table_order() {
        let names: Vec<&str> = HEAD_PATTERNS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["title", "meta", "link", "style", "script", "noscript"]
        );
    }
}
