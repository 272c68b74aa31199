//! Final ordering of merged head tags

use super::Tag;

/// Output buckets, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Bucket {
    Title,
    Charset,
    Meta,
    Link,
    Style,
    Script,
    Other,
}

/// Stable-sort tags into head order.
///
/// Order: the first tag mentioning `<title`, the first other tag mentioning
/// `charset`, remaining `<meta` tags without `charset`, then `<link`,
/// `<style`, `<script`/`<noscript`, and everything else. Classification is a
/// case-insensitive substring test on the raw markup, so a `<link>` whose
/// attributes mention `charset` can take the charset slot.
pub fn sort_head_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let title = tags.iter().position(|tag| tag.mentions("<title"));
    let charset = tags
        .iter()
        .enumerate()
        .find(|(idx, tag)| Some(*idx) != title && tag.mentions("charset"))
        .map(|(idx, _)| idx);

    let mut ranked: Vec<(Bucket, Tag)> = tags
        .into_iter()
        .enumerate()
        .map(|(idx, tag)| {
            let bucket = if Some(idx) == title {
                Bucket::Title
            } else if Some(idx) == charset {
                Bucket::Charset
            } else {
                classify(&tag)
            };
            (bucket, tag)
        })
        .collect();

    // sort_by_key is stable
    ranked.sort_by_key(|(bucket, _)| *bucket);
    ranked.into_iter().map(|(_, tag)| tag).collect()
}

fn classify(tag: &Tag) -> Bucket {
    if tag.mentions("<meta") && !tag.mentions("charset") {
        Bucket::Meta
    } else if tag.mentions("<link") {
        Bucket::Link
    } else if tag.mentions("<style") {
        Bucket::Style
    } else if tag.mentions("<script") || tag.mentions("<noscript") {
        Bucket::Script
    } else {
        Bucket::Other
    }
}
