//! Layout/page head merging

use super::{extract_tags, sort_head_tags, Tag};
use indexmap::IndexMap;

/// Separator between tags in merged output
pub const TAG_SEPARATOR: &str = "\n    ";

/// Merges a layout head fragment with a page head fragment
pub struct HeadTagMerger;

impl HeadTagMerger {
    /// Merge two head fragments into ordered tags.
    ///
    /// Keyed tags are collected in an insertion-ordered map, layout first.
    /// A page tag with the same identity key replaces the layout tag in
    /// place. Unkeyed tags follow, page before layout, and are never
    /// deduplicated. The result is then sorted by [`sort_head_tags`].
    pub fn merge_tags(layout_head: &str, page_head: &str) -> Vec<Tag> {
        let mut keyed: IndexMap<String, Tag> = IndexMap::new();
        let mut layout_unkeyed = Vec::new();
        let mut page_unkeyed = Vec::new();

        for tag in extract_tags(layout_head) {
            match tag.identity_key().map(str::to_owned) {
                Some(key) => {
                    keyed.insert(key, tag);
                }
                None => layout_unkeyed.push(tag),
            }
        }

        for tag in extract_tags(page_head) {
            match tag.identity_key().map(str::to_owned) {
                // Overwrites keep the layout tag's position
                Some(key) => {
                    keyed.insert(key, tag);
                }
                None => page_unkeyed.push(tag),
            }
        }

        let mut merged: Vec<Tag> = keyed.into_values().collect();
        merged.extend(page_unkeyed);
        merged.extend(layout_unkeyed);

        sort_head_tags(merged)
    }

    /// Merge two head fragments into markup ready to splice into `<head>`
    ///
    /// # Examples
    ///
    /// ```
    /// use headmerge::domain::head::HeadTagMerger;
    ///
    /// let merged = HeadTagMerger::merge(
    ///     r#"<title>Layout</title><meta name="author" content="Ada">"#,
    ///     "<title>Page</title>",
    /// );
    /// assert_eq!(
    ///     merged,
    ///     "<title>Page</title>\n    <meta name=\"author\" content=\"Ada\">"
    /// );
    /// ```
    pub fn merge(layout_head: &str, page_head: &str) -> String {
        Self::merge_tags(layout_head, page_head)
            .iter()
            .map(Tag::markup)
            .collect::<Vec<_>>()
            .join(TAG_SEPARATOR)
    }
}
