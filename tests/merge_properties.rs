//! Behavioural tests for head merging through the library API

use headmerge::domain::head::{HeadTagMerger, Tag, TAG_SEPARATOR};
use headmerge::merge;

fn split(merged: &str) -> Vec<&str> {
    if merged.is_empty() {
        Vec::new()
    } else {
        merged.split(TAG_SEPARATOR).collect()
    }
}

#[test]
fn test_page_tag_replaces_layout_tag_with_same_key() {
    let cases = [
        (
            r#"<meta name="author" content="Layout">"#,
            r#"<meta name="author" content="Page">"#,
        ),
        (
            r#"<meta property="og:url" content="https://layout">"#,
            r#"<meta property="og:url" content="https://page">"#,
        ),
        (
            r#"<meta http-equiv="refresh" content="10">"#,
            r#"<meta http-equiv="refresh" content="30">"#,
        ),
        (
            r#"<link rel="canonical" href="/same" data-from="layout">"#,
            r#"<link rel="canonical" href="/same" data-from="page">"#,
        ),
        ("<title>Layout</title>", "<title>Page</title>"),
        ("<style>.layout{}</style>", "<style>.page{}</style>"),
        (
            r#"<script src="/layout.js"></script>"#,
            r#"<script src="/page.js"></script>"#,
        ),
    ];

    for (layout, page) in cases {
        let merged = merge(layout, page);
        assert!(merged.contains(page), "missing page tag for {}", page);
        assert!(!merged.contains(layout), "layout tag survived: {}", layout);
    }
}

#[test]
fn test_unkeyed_tags_are_never_dropped() {
    let unkeyed = r#"<meta content="no identifying attribute">"#;
    let layout = format!("{0}{0}", unkeyed);
    let page = format!("{0}<title>T</title>", unkeyed);

    let merged = merge(&layout, &page);
    assert_eq!(merged.matches(unkeyed).count(), 3);
}

#[test]
fn test_bucket_ordering() {
    let layout = r#"<noscript><p>enable js</p></noscript>
    <script src="/app.js"></script>
    <style>body{}</style>
    <link rel="icon" href="/favicon.ico">
    <meta name="viewport" content="width=device-width">"#;
    let page = r#"<link rel="stylesheet" href="/page.css">
    <meta charset="UTF-8">
    <meta property="og:type" content="website">
    <title>Page</title>"#;

    let merged = merge(layout, page);
    assert_eq!(
        split(&merged),
        vec![
            "<title>Page</title>",
            r#"<meta charset="UTF-8">"#,
            r#"<meta name="viewport" content="width=device-width">"#,
            r#"<meta property="og:type" content="website">"#,
            r#"<link rel="icon" href="/favicon.ico">"#,
            r#"<link rel="stylesheet" href="/page.css">"#,
            "<style>body{}</style>",
            r#"<script src="/app.js"></script>"#,
            "<noscript><p>enable js</p></noscript>",
        ]
    );
}

#[test]
fn test_empty_inputs() {
    assert_eq!(merge("", ""), "");
    assert!(HeadTagMerger::merge_tags("", "").is_empty());
}

#[test]
fn test_description_and_title_override_scenario() {
    let layout = r#"<meta charset="UTF-8"/><meta name="description" content="Layout"/><title>Layout</title>"#;
    let page = r#"<meta name="description" content="Page"/><title>Page</title>"#;

    let merged = merge(layout, page);
    assert!(merged.contains("<title>Page</title>"));
    assert!(!merged.contains("<title>Layout</title>"));
    assert_eq!(merged.matches(r#"name="description""#).count(), 1);
    assert!(merged.contains(r#"<meta name="description" content="Page"/>"#));
    assert_eq!(
        split(&merged),
        vec![
            "<title>Page</title>",
            r#"<meta charset="UTF-8"/>"#,
            r#"<meta name="description" content="Page"/>"#,
        ]
    );
}

#[test]
fn test_stylesheets_with_different_href_both_survive() {
    let layout = r#"<link rel="stylesheet" href="/a.css"/>"#;
    let page = r#"<link rel="stylesheet" href="/b.css"/>"#;

    let tags = HeadTagMerger::merge_tags(layout, page);
    let keys: Vec<Option<&str>> = tags.iter().map(Tag::identity_key).collect();
    assert_eq!(
        keys,
        vec![
            Some("link:rel:stylesheet:href:/a.css"),
            Some("link:rel:stylesheet:href:/b.css"),
        ]
    );
}

#[test]
fn test_malformed_markup_is_dropped_silently() {
    let merged = merge("<title>unclosed", "<style>also unclosed <meta name=\"a\">");
    assert_eq!(merged, r#"<meta name="a">"#);
}
