//! Output formatting utilities

use crate::application::MergedPage;
use crate::domain::Tag;

/// Format merged heads for stdout
pub fn format_merged_pages(pages: &[MergedPage]) -> String {
    match pages {
        [] => "No pages found".to_string(),
        [single] => format!("{}\n", single.head),
        _ => {
            let mut output = String::new();
            for page in pages {
                output.push_str(&format!(
                    "==> {} <==\n{}\n\n",
                    page.page.display(),
                    page.head
                ));
            }
            output
        }
    }
}

/// Format tags as `<identity key>\t<markup>`, one per line.
///
/// Unkeyed tags show `-`. Whitespace runs inside markup collapse to one space.
pub fn format_tag_list(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        let markup = tag.markup().split_whitespace().collect::<Vec<_>>().join(" ");
        output.push_str(&format!(
            "{}\t{}\n",
            tag.identity_key().unwrap_or("-"),
            markup
        ));
    }

    output
}
