//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "headmerge")]
#[command(about = "Merge layout and page <head> tags for static sites", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Merge the layout head into page heads
    Merge {
        /// Page files (default: every page in the configured pages directory)
        #[arg(value_name = "PAGE")]
        pages: Vec<PathBuf>,

        /// Layout document (overrides HEADMERGE_LAYOUT and site config)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Write the merged head of a single page to this file
        #[arg(short, long, conflicts_with = "out_dir")]
        output: Option<PathBuf>,

        /// Write one <page>.head.html per page into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// List the head tags of a document with their identity keys
    Tags {
        /// HTML document or head fragment
        file: PathBuf,
    },
}
