//! File system access for sites, layouts and pages

use crate::error::{HeadmergeError, Result};
use crate::infrastructure::config::SITE_DIR;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A page document found under the pages directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// Path used to read the page
    pub path: PathBuf,
    /// Path relative to the directory it was found in
    pub relative: PathBuf,
}

impl PageEntry {
    pub fn new(path: PathBuf, relative: PathBuf) -> Self {
        PageEntry { path, relative }
    }
}

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from .headmerge/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .headmerge/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .headmerge directory exists
    fn is_initialized(&self) -> bool;

    /// Create .headmerge directory
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemSite {
    pub root: PathBuf,
}

impl FileSystemSite {
    /// Create a new site with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemSite { root }
    }

    /// Discover the site root.
    /// Checks HEADMERGE_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("HEADMERGE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_site_dir(&path) {
                return Ok(FileSystemSite::new(path));
            } else {
                return Err(HeadmergeError::Config(format!(
                    "HEADMERGE_ROOT is set to '{}' but no {} directory found. \
                    Run 'headmerge init' in that directory or unset HEADMERGE_ROOT.",
                    path.display(),
                    SITE_DIR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_site_dir(dir))
            .map(|dir| FileSystemSite::new(dir.to_path_buf()))
            .ok_or_else(|| HeadmergeError::NotSiteDirectory(start.to_path_buf()))
    }

    fn has_site_dir(path: &Path) -> bool {
        path.join(SITE_DIR).is_dir()
    }

    /// Resolve a configured path against the site root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// List `*.html` pages under a directory, recursively, sorted by path.
    /// Hidden directories are skipped. A missing directory yields no pages.
    pub fn list_pages(&self, pages_dir: &Path) -> Vec<PageEntry> {
        let dir = self.resolve(pages_dir);
        if !dir.is_dir() {
            return Vec::new();
        }

        let walker = WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

        let mut pages = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() || !is_html(entry.path()) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&dir) else {
                continue;
            };
            pages.push(PageEntry::new(entry.path().to_path_buf(), rel.to_path_buf()));
        }

        pages.sort_by(|a, b| a.relative.cmp(&b.relative));
        pages
    }
}

impl SiteRepository for FileSystemSite {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_site_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let site_dir = self.root.join(SITE_DIR);

        if site_dir.exists() {
            return Err(HeadmergeError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&site_dir)?;
        Ok(())
    }
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

/// Read a document, mapping a missing file to the given error
pub fn read_document(path: &Path, missing: fn(PathBuf) -> HeadmergeError) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            missing(path.to_path_buf())
        } else {
            HeadmergeError::Io(e)
        }
    })
}

/// Write a file, creating parent directories if needed
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content).map_err(HeadmergeError::Io)
}
