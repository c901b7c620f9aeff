//! folio-rs: RSS feed and sitemap generation for a Markdown blog/portfolio
//!
//! Content documents are loaded from the content directory, selected by the
//! feed and route queries, mapped by pure serializers and written to the
//! public directory as `rss.xml` and `sitemap.xml`.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod query;
pub mod serialize;

use anyhow::Result;
use std::path::Path;

pub use error::FolioError;

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "site.yml";

/// The main site handle
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory
    pub content_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Generate rss.xml and sitemap.xml
    pub fn build(&self) -> Result<generator::BuildReport> {
        commands::build::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
