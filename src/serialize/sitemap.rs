//! Sitemap serializer

use serde::{Deserialize, Serialize};

use crate::config::SiteMetadata;
use crate::query::SiteRoute;

/// Change frequency advertised for every URL
pub const CHANGEFREQ: &str = "daily";

/// Priority advertised for every URL
pub const PRIORITY: f64 = 0.7;

/// One `<url>` record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub url: String,
    pub changefreq: String,
    pub priority: f64,
}

/// Map already-filtered routes to sitemap entries, in input order
pub fn serialize_sitemap(site: &SiteMetadata, routes: &[SiteRoute]) -> Vec<SitemapEntry> {
    routes
        .iter()
        .map(|route| SitemapEntry {
            url: format!("{}{}", site.url, route.path),
            changefreq: CHANGEFREQ.to_string(),
            priority: PRIORITY,
        })
        .collect()
}
