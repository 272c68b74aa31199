//! Merge head use case
//!
//! Resolves the layout and the pages to process, merges each page head with
//! the layout head, and optionally writes the results to disk.

use crate::domain::{head_content, HeadTagMerger};
use crate::error::{HeadmergeError, Result};
use crate::infrastructure::repository::{read_document, write_file};
use crate::infrastructure::{FileSystemSite, PageEntry, SiteRepository};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Environment variable overriding the configured layout
pub const LAYOUT_ENV: &str = "HEADMERGE_LAYOUT";

/// Options for a merge run
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Page files to merge (empty = every page in the configured pages directory)
    pub pages: Vec<PathBuf>,

    /// Layout file overriding the environment and site config
    pub layout: Option<PathBuf>,

    /// Output file for a single page
    pub output: Option<PathBuf>,

    /// Output directory for one `.head.html` file per page
    pub out_dir: Option<PathBuf>,
}

/// Where the layout path came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    /// `--layout` or `HEADMERGE_LAYOUT`; must exist
    Explicit(PathBuf),
    /// Site config; a missing file is tolerated
    Configured(PathBuf),
}

/// Merged head of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPage {
    pub page: PathBuf,
    pub relative: PathBuf,
    pub head: String,
}

/// Merge one page document against an optional layout head fragment.
///
/// Without a layout the page head fragment is returned unchanged. A page
/// without a `<head>` block is never merged: its text comes back as is.
pub fn merge_page(layout_head: Option<&str>, page_document: &str) -> String {
    let Some(page_head) = head_content(page_document) else {
        return page_document.to_string();
    };
    match layout_head {
        Some(layout_head) => HeadTagMerger::merge(layout_head, page_head),
        None => page_head.to_string(),
    }
}

/// Path of a page below the output directory: its normal components only
fn output_relative(path: &Path) -> PathBuf {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Service for merging page heads with the layout head
pub struct MergeHeadService {
    site: Option<FileSystemSite>,
}

impl MergeHeadService {
    /// Create a merge service; `site` is `None` outside an initialised site
    pub fn new(site: Option<FileSystemSite>) -> Self {
        MergeHeadService { site }
    }

    fn require_site(&self) -> Result<&FileSystemSite> {
        match &self.site {
            Some(site) => Ok(site),
            None => Err(HeadmergeError::NotSiteDirectory(std::env::current_dir()?)),
        }
    }

    /// Pick the layout: explicit flag, then `HEADMERGE_LAYOUT`, then site config
    pub fn resolve_layout(&self, flag: Option<&Path>) -> Result<LayoutSource> {
        if let Some(path) = flag {
            return Ok(LayoutSource::Explicit(path.to_path_buf()));
        }

        if let Ok(path) = std::env::var(LAYOUT_ENV) {
            if !path.is_empty() {
                return Ok(LayoutSource::Explicit(PathBuf::from(path)));
            }
        }

        let site = self.require_site()?;
        let config = site.load_config()?;
        Ok(LayoutSource::Configured(site.resolve(&config.layout)))
    }

    /// Read the layout head fragment.
    ///
    /// `None` when a configured layout is missing or the layout has no
    /// `<head>` block; pages then pass through unchanged.
    pub fn load_layout_head(&self, source: &LayoutSource) -> Result<Option<String>> {
        let document = match source {
            LayoutSource::Explicit(path) => read_document(path, HeadmergeError::LayoutNotFound)?,
            LayoutSource::Configured(path) => {
                if !path.exists() {
                    tracing::warn!(layout = %path.display(), "layout not found, page heads left unchanged");
                    return Ok(None);
                }
                read_document(path, HeadmergeError::LayoutNotFound)?
            }
        };

        let layout_path = match source {
            LayoutSource::Explicit(path) | LayoutSource::Configured(path) => path,
        };
        match head_content(&document) {
            Some(head) => Ok(Some(head.to_string())),
            None => {
                tracing::warn!(layout = %layout_path.display(), "layout has no <head> block, page heads left unchanged");
                Ok(None)
            }
        }
    }

    /// Pick the pages: the given files, or every page in the configured directory
    pub fn resolve_pages(&self, pages: &[PathBuf]) -> Result<Vec<PageEntry>> {
        if !pages.is_empty() {
            return pages
                .iter()
                .map(|path| {
                    if !path.is_file() {
                        return Err(HeadmergeError::PageNotFound(path.clone()));
                    }
                    Ok(PageEntry::new(path.clone(), output_relative(path)))
                })
                .collect();
        }

        let site = self.require_site()?;
        let config = site.load_config()?;
        let found = site.list_pages(&config.pages);
        if found.is_empty() {
            tracing::warn!(pages = %site.resolve(&config.pages).display(), "no pages found");
        }
        Ok(found)
    }

    /// Merge every selected page with the layout
    pub fn execute(&self, options: &MergeOptions) -> Result<Vec<MergedPage>> {
        let pages = self.resolve_pages(&options.pages)?;

        if options.output.is_some() && pages.len() > 1 {
            return Err(HeadmergeError::Config(
                "--output takes a single page; use --out-dir for several pages".to_string(),
            ));
        }

        let layout = self.resolve_layout(options.layout.as_deref())?;
        let layout_head = self.load_layout_head(&layout)?;

        let mut merged = Vec::with_capacity(pages.len());
        for entry in pages {
            let document = read_document(&entry.path, HeadmergeError::PageNotFound)?;
            if head_content(&document).is_none() {
                tracing::warn!(page = %entry.path.display(), "page has no <head> block, left unchanged");
            }

            let head = merge_page(layout_head.as_deref(), &document);
            tracing::debug!(page = %entry.path.display(), bytes = head.len(), "merged head");

            merged.push(MergedPage {
                page: entry.path,
                relative: entry.relative,
                head,
            });
        }

        Ok(merged)
    }

    /// Write merged heads to `--output` or `--out-dir`.
    ///
    /// Returns the written paths; empty when results go to stdout.
    pub fn write_outputs(&self, merged: &[MergedPage], options: &MergeOptions) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        if let Some(output) = &options.output {
            if let Some(page) = merged.first() {
                write_file(output, &page.head)?;
                written.push(output.clone());
            }
        } else if let Some(out_dir) = &options.out_dir {
            let targets: Vec<PathBuf> = merged
                .iter()
                .map(|page| out_dir.join(page.relative.with_extension("head.html")))
                .collect();

            let mut seen = HashSet::new();
            for (page, target) in merged.iter().zip(&targets) {
                if !seen.insert(target) {
                    return Err(HeadmergeError::Config(format!(
                        "{} would overwrite {}; pages must have distinct paths under --out-dir",
                        page.page.display(),
                        target.display()
                    )));
                }
            }

            for (page, target) in merged.iter().zip(targets) {
                write_file(&target, &page.head)?;
                written.push(target);
            }
        }

        for path in &written {
            tracing::info!(output = %path.display(), "wrote merged head");
        }
        Ok(written)
    }
}
