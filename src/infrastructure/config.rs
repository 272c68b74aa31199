//! Configuration management

use crate::error::{HeadmergeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the directory marking a site root
pub const SITE_DIR: &str = ".headmerge";

const DEFAULT_LAYOUT: &str = "layout.html";
const DEFAULT_PAGES: &str = "pages";

/// Log level, matching tracing levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Convert to a tracing filter directive string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = HeadmergeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(HeadmergeError::Config(format!("Invalid log level: {}", s))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Layout document, relative to the site root
    pub layout: PathBuf,
    /// Pages directory, relative to the site root
    pub pages: PathBuf,
    #[serde(default)]
    pub log_level: LogLevel,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            layout: PathBuf::from(DEFAULT_LAYOUT),
            pages: PathBuf::from(DEFAULT_PAGES),
            log_level: LogLevel::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .headmerge/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(SITE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HeadmergeError::NotSiteDirectory(path.to_path_buf())
            } else {
                HeadmergeError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .headmerge/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let site_dir = path.join(SITE_DIR);
        let config_path = site_dir.join("config.toml");

        if !site_dir.exists() {
            fs::create_dir(&site_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.layout, PathBuf::from("layout.html"));
        assert_eq!(config.pages, PathBuf::from("pages"));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.layout = PathBuf::from("templates/base.html");
        config.log_level = LogLevel::Debug;

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".headmerge/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.layout, config.layout);
        assert_eq!(loaded.pages, config.pages);
        assert_eq!(loaded.log_level, LogLevel::Debug);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_saved_config_is_readable_toml() {
        let temp = TempDir::new().unwrap();
        Config::new().save_to_dir(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(".headmerge/config.toml")).unwrap();
        assert!(content.contains("layout = \"layout.html\""));
        assert!(content.contains("log_level = \"warn\""));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());
        match result.unwrap_err() {
            HeadmergeError::NotSiteDirectory(_) => {}
            other => panic!("Expected NotSiteDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(SITE_DIR)).unwrap();
        fs::write(
            temp.path().join(".headmerge/config.toml"),
            "layout = \"layout.html\"\nlog_level = \"loud\"\n",
        )
        .unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            HeadmergeError::TomlDeserialize(_) => {}
            other => panic!("Expected TomlDeserialize error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_without_log_level_uses_default() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(SITE_DIR)).unwrap();
        fs::write(
            temp.path().join(".headmerge/config.toml"),
            "layout = \"layout.html\"\npages = \"pages\"\ncreated = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }
}
