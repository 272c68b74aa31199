//! Initialize site use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemSite, SiteRepository};
use std::fs;
use std::path::Path;

/// Service for creating a new site
pub struct InitService;

impl InitService {
    /// Initialize a site at the specified path and return its default config.
    pub fn execute(path: &Path) -> Result<Config> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let site = FileSystemSite::new(path.to_path_buf());
        site.initialize()?;

        let config = Config::new();
        site.save_config(&config)?;

        tracing::info!(root = %path.display(), "initialized site");
        Ok(config)
    }
}
