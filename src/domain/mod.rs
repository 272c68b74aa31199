//! Domain layer - Head parsing and merging

pub mod document;
pub mod head;

pub use document::{head_content, head_fragment};
pub use head::{HeadTagMerger, Tag};
