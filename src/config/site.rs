//! Site configuration (site.yml)

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::plugins::{AnalyticsConfig, FeedConfig, MarkdownConfig, SitemapConfig};
use crate::error::FolioError;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Global site metadata handed to the serializers
    pub site: SiteMetadata,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    /// IANA timezone used to interpret frontmatter dates; empty means UTC
    pub timezone: String,

    // Plugins
    pub feed: FeedConfig,
    pub sitemap: SitemapConfig,
    pub markdown: MarkdownConfig,
    pub analytics: AnalyticsConfig,
    pub fonts: Vec<String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMetadata::default(),
            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            timezone: String::new(),
            feed: FeedConfig::default(),
            sitemap: SitemapConfig::default(),
            markdown: MarkdownConfig::default(),
            analytics: AnalyticsConfig::default(),
            fonts: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the configured timezone
    pub fn tz(&self) -> Result<Tz, FolioError> {
        let name = self.timezone.trim();
        if name.is_empty() {
            return Ok(chrono_tz::UTC);
        }
        name.parse::<Tz>()
            .map_err(|_| FolioError::UnknownTimezone(name.to_string()))
    }
}

/// Site metadata (`site:` block)
///
/// Read-only for the lifetime of a build and passed explicitly into each
/// serializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Base URL; joined verbatim with slugs and route paths
    pub url: String,
    pub title: String,
    pub subtitle: String,
    pub copyright: String,
    pub disqus_shortname: String,
    pub menu: Vec<MenuItem>,
    pub author: Author,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            url: "http://example.com".to_string(),
            title: "Folio".to_string(),
            subtitle: String::new(),
            copyright: String::new(),
            disqus_shortname: String::new(),
            menu: Vec::new(),
            author: Author::default(),
        }
    }
}

/// Navigation menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub path: String,
}

/// Site author and social handles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub twitter: String,
    pub github: String,
    pub medium: String,
    #[serde(alias = "linkedIn")]
    pub linkedin: String,
}
