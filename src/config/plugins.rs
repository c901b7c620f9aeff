//! Plugin configuration blocks
//!
//! These are static data: the build reads them, nothing here executes.

use serde::{Deserialize, Serialize};

/// RSS feed options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Output path relative to the public directory
    pub output: String,
    /// Maximum number of entries
    pub limit: usize,
    /// Regex a document's layout must match to be syndicated
    pub layouts: String,
    /// Value of the channel `<generator>` element
    pub generator: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            output: "/rss.xml".to_string(),
            limit: 1000,
            layouts: "(post|project)".to_string(),
            generator: format!("folio-rs {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Sitemap options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output path relative to the public directory
    pub output: String,
    /// Alternation of path prefixes that never appear in the sitemap
    pub exclude: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            output: "/sitemap.xml".to_string(),
            exclude: "/404/|/404.html|/dev-404-page/".to_string(),
        }
    }
}

/// Markdown transform options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub highlight_theme: String,
    pub line_numbers: bool,
    /// Convert straight quotes and dashes to typographic ones
    pub smartypants: bool,
    pub responsive_iframe: ResponsiveIframeConfig,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            highlight_theme: "base16-ocean.dark".to_string(),
            line_numbers: false,
            smartypants: true,
            responsive_iframe: ResponsiveIframeConfig::default(),
        }
    }
}

/// Wrapper applied around embedded iframes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveIframeConfig {
    pub enable: bool,
    pub wrapper_style: String,
}

impl Default for ResponsiveIframeConfig {
    fn default() -> Self {
        Self {
            enable: true,
            wrapper_style: "margin-bottom: 1.0725rem".to_string(),
        }
    }
}

/// Analytics settings, carried for the page layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub tracking_id: String,
}
