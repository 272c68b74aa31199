//! Inspect tags use case

use crate::domain::head::{extract_tags, Tag};
use crate::domain::head_fragment;
use crate::error::{HeadmergeError, Result};
use crate::infrastructure::repository::read_document;
use std::path::Path;

/// Service listing the head tags of one document, as the merger sees them
pub struct InspectTagsService;

impl InspectTagsService {
    /// Extract the tags of a document's head, in extraction order
    pub fn execute(path: &Path) -> Result<Vec<Tag>> {
        let document = read_document(path, HeadmergeError::PageNotFound)?;
        let tags = extract_tags(head_fragment(&document));
        tracing::debug!(file = %path.display(), count = tags.len(), "extracted tags");
        Ok(tags)
    }
}
