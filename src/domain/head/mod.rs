//! Head tag merging

pub mod extract;
pub mod merger;
pub mod order;
pub mod tag;

// Re-export main types
pub use extract::{extract_tags, TagPattern, HEAD_PATTERNS};
pub use merger::{HeadTagMerger, TAG_SEPARATOR};
pub use order::sort_head_tags;
pub use tag::{identity_key, tag_name, Tag};
