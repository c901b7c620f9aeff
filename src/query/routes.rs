//! Site routes and the sitemap route query

use indexmap::IndexSet;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::content::ContentDocument;
use crate::error::FolioError;

/// Error pages every build emits
const ERROR_PAGES: [&str; 2] = ["/404/", "/404.html"];

/// One generated page path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteRoute {
    pub path: String,
}

impl SiteRoute {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Collect the routes a build produces
///
/// The home page, every menu path, every published document and the error
/// pages, deduplicated in first-seen order.
pub fn collect_routes(config: &SiteConfig, documents: &[ContentDocument]) -> Vec<SiteRoute> {
    let mut paths: IndexSet<String> = IndexSet::new();
    paths.insert("/".to_string());

    for item in &config.site.menu {
        paths.insert(item.path.clone());
    }

    for doc in documents.iter().filter(|d| !d.is_draft()) {
        paths.insert(doc.slug.clone());
    }

    for page in ERROR_PAGES {
        paths.insert(page.to_string());
    }

    paths.into_iter().map(SiteRoute::new).collect()
}

/// Drops routes that must not be indexed
///
/// Equivalent to keeping paths matching `^(?!<exclude>)`: a route is removed
/// when one of the excluded alternatives matches at its start.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    excluded: Regex,
}

impl RouteQuery {
    pub fn new(exclude: &str) -> Result<Self, FolioError> {
        let anchored = format!("^(?:{})", exclude);
        let excluded = Regex::new(&anchored).map_err(|source| FolioError::InvalidPattern {
            kind: "sitemap exclude",
            pattern: exclude.to_string(),
            source,
        })?;
        Ok(Self { excluded })
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self, FolioError> {
        Self::new(&config.sitemap.exclude)
    }

    pub fn is_eligible(&self, route: &SiteRoute) -> bool {
        !self.excluded.is_match(&route.path)
    }

    /// Eligible routes in input order
    pub fn run(&self, routes: &[SiteRoute]) -> Vec<SiteRoute> {
        routes
            .iter()
            .filter(|route| self.is_eligible(route))
            .cloned()
            .collect()
    }
}
