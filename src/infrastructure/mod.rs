//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::{Config, LogLevel};
pub use repository::{FileSystemSite, PageEntry, SiteRepository};
