//! Application layer - Use cases and orchestration

pub mod init;
pub mod inspect_tags;
pub mod manage_config;
pub mod merge_head;

pub use init::InitService;
pub use inspect_tags::InspectTagsService;
pub use manage_config::ConfigService;
pub use merge_head::{MergeHeadService, MergeOptions, MergedPage};
