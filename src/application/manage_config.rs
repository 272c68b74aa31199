//! Config management use case

use crate::error::{HeadmergeError, Result};
use crate::infrastructure::{Config, FileSystemSite, LogLevel, SiteRepository};
use std::path::PathBuf;

/// Service for managing site configuration
pub struct ConfigService {
    site: FileSystemSite,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(site: FileSystemSite) -> Self {
        ConfigService { site }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.site.load_config()?;

        match key {
            "layout" => Ok(config.layout.display().to_string()),
            "pages" => Ok(config.pages.display().to_string()),
            "log_level" => Ok(config.log_level.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(HeadmergeError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: layout, pages, log_level, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.site.load_config()?;

        match key {
            "layout" => config.layout = PathBuf::from(value),
            "pages" => config.pages = PathBuf::from(value),
            "log_level" => config.log_level = value.parse::<LogLevel>()?,
            "created" => {
                return Err(HeadmergeError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(HeadmergeError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: layout, pages, log_level",
                    key
                )));
            }
        }

        self.site.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.site.load_config()
    }
}
