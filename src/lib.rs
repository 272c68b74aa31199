//! headmerge - Layout/page head merging for static sites
//!
//! Merges the `<head>` tags of a shared layout document into each page,
//! letting page tags override layout tags that declare the same thing.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::HeadmergeError;

/// Merge a layout head fragment with a page head fragment.
///
/// See [`domain::head::HeadTagMerger::merge`].
pub fn merge(layout_head: &str, page_head: &str) -> String {
    domain::head::HeadTagMerger::merge(layout_head, page_head)
}
