//! Error types for headmerge

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for headmerge
#[derive(Debug, Error)]
pub enum HeadmergeError {
    #[error("Not a headmerge site: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Layout not found: {0}")]
    LayoutNotFound(PathBuf),

    #[error("Page not found: {0}")]
    PageNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl HeadmergeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HeadmergeError::NotSiteDirectory(_) => 2,
            HeadmergeError::LayoutNotFound(_) | HeadmergeError::PageNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HeadmergeError::NotSiteDirectory(path) => {
                format!(
                    "Not a headmerge site: {}\n\n\
                    Suggestions:\n\
                    • Run 'headmerge init' in your site directory\n\
                    • Pass the layout explicitly: headmerge merge --layout layout.html page.html\n\
                    • Set HEADMERGE_ROOT environment variable to your site path",
                    path.display()
                )
            }
            HeadmergeError::LayoutNotFound(path) => {
                format!(
                    "Layout not found: {}\n\n\
                    Suggestions:\n\
                    • Check the --layout path or HEADMERGE_LAYOUT\n\
                    • Configure the layout: headmerge config layout 'layout.html'",
                    path.display()
                )
            }
            HeadmergeError::PageNotFound(path) => {
                format!(
                    "Page not found: {}\n\n\
                    Suggestions:\n\
                    • Page paths are relative to the current directory\n\
                    • Omit page arguments to merge every page in the configured pages directory",
                    path.display()
                )
            }
            HeadmergeError::Config(msg) => {
                if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid levels: trace, debug, info, warn, error\n\
                        Example: headmerge config log_level debug",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using HeadmergeError
pub type Result<T> = std::result::Result<T, HeadmergeError>;
