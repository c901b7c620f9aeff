//! Generator module - turns loaded content into rss.xml and sitemap.xml

mod rss;
mod sitemap;
mod xml;

pub use rss::render_rss;
pub use sitemap::render_sitemap;

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::ContentDocument;
use crate::query::{collect_routes, FeedQuery, RouteQuery};
use crate::serialize::{serialize_feed, serialize_sitemap};
use crate::Folio;

/// What a build wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub feed_path: PathBuf,
    pub feed_entries: usize,
    pub sitemap_path: PathBuf,
    pub sitemap_entries: usize,
}

/// Feed and sitemap generator
pub struct Generator {
    folio: Folio,
    feed_query: FeedQuery,
    route_query: RouteQuery,
    tz: Tz,
}

impl Generator {
    /// Create a new generator, compiling the configured patterns
    pub fn new(folio: &Folio) -> Result<Self> {
        let config = &folio.config;
        Ok(Self {
            folio: folio.clone(),
            feed_query: FeedQuery::from_config(config)?,
            route_query: RouteQuery::from_config(config)?,
            tz: config.tz()?,
        })
    }

    /// Generate both outputs from the loaded documents
    pub fn generate(&self, documents: &[ContentDocument]) -> Result<BuildReport> {
        fs::create_dir_all(&self.folio.public_dir).with_context(|| {
            format!("Failed to create {}", self.folio.public_dir.display())
        })?;

        let (feed_path, feed_entries) = self.generate_feed(documents)?;
        let (sitemap_path, sitemap_entries) = self.generate_sitemap(documents)?;

        Ok(BuildReport {
            feed_path,
            feed_entries,
            sitemap_path,
            sitemap_entries,
        })
    }

    /// Generate the RSS feed
    fn generate_feed(&self, documents: &[ContentDocument]) -> Result<(PathBuf, usize)> {
        let config = &self.folio.config;
        let selected = self.feed_query.run(documents);
        let entries = serialize_feed(&config.site, &selected);

        let xml = render_rss(&config.site, &config.feed, &entries, &self.tz, Utc::now());
        let output_path = output_path(&self.folio.public_dir, &config.feed.output);
        write_output(&output_path, &xml)?;

        tracing::info!("Generated {} ({} entries)", config.feed.output, entries.len());
        Ok((output_path, entries.len()))
    }

    /// Generate the sitemap
    fn generate_sitemap(&self, documents: &[ContentDocument]) -> Result<(PathBuf, usize)> {
        let config = &self.folio.config;
        let routes = self.route_query.run(&collect_routes(config, documents));
        let entries = serialize_sitemap(&config.site, &routes);

        let xml = render_sitemap(&entries);
        let output_path = output_path(&self.folio.public_dir, &config.sitemap.output);
        write_output(&output_path, &xml)?;

        tracing::info!("Generated {} ({} urls)", config.sitemap.output, entries.len());
        Ok((output_path, entries.len()))
    }
}

/// Resolve a site-absolute output path (`/rss.xml`) inside the public directory
pub fn output_path(public_dir: &Path, output: &str) -> PathBuf {
    public_dir.join(output.trim_start_matches('/'))
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use tempfile::TempDir;

    fn doc(slug: &str, layout: &str, date: &str, draft: bool) -> ContentDocument {
        let fm = FrontMatter {
            title: slug.trim_matches('/').to_string(),
            date: Some(date.to_string()),
            layout: Some(layout.to_string()),
            draft,
            ..Default::default()
        };
        ContentDocument::new(fm, format!("<p>{}</p>", slug), slug)
    }

    #[test]
    fn test_output_path() {
        let public = Path::new("/site/public");
        assert_eq!(
            output_path(public, "/rss.xml"),
            PathBuf::from("/site/public/rss.xml")
        );
        assert_eq!(
            output_path(public, "feeds/all.xml"),
            PathBuf::from("/site/public/feeds/all.xml")
        );
    }

    #[test]
    fn test_generate_writes_both_outputs() {
        let tmp = TempDir::new().unwrap();
        let mut folio = Folio::new(tmp.path()).unwrap();
        folio.config.site.url = "https://example.com".to_string();

        let docs = vec![
            doc("/older/", "post", "2019-01-01", false),
            doc("/newer/", "project", "2020-01-01", false),
            doc("/secret/", "post", "2021-01-01", true),
            doc("/about/", "page", "2018-01-01", false),
        ];

        let report = Generator::new(&folio).unwrap().generate(&docs).unwrap();
        assert_eq!(report.feed_entries, 2);
        // "/", "/older/", "/newer/", "/about/"
        assert_eq!(report.sitemap_entries, 4);

        let rss = fs::read_to_string(&report.feed_path).unwrap();
        let newer = rss.find("https://example.com/newer/").unwrap();
        let older = rss.find("https://example.com/older/").unwrap();
        assert!(newer < older);
        assert!(!rss.contains("/secret/"));

        let sitemap = fs::read_to_string(&report.sitemap_path).unwrap();
        assert!(sitemap.contains("<loc>https://example.com/about/</loc>"));
        assert!(!sitemap.contains("/404"));
        assert!(!sitemap.contains("/secret/"));
    }

    #[test]
    fn test_invalid_layout_pattern_fails() {
        let tmp = TempDir::new().unwrap();
        let mut folio = Folio::new(tmp.path()).unwrap();
        folio.config.feed.layouts = "(post".to_string();
        assert!(Generator::new(&folio).is_err());
    }
}
