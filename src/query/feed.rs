//! Feed query: which documents are syndicated, and in what order

use chrono_tz::Tz;
use regex::Regex;
use std::cmp::Ordering;

use crate::config::SiteConfig;
use crate::content::ContentDocument;
use crate::error::FolioError;

/// Filters, sorts and limits documents for the feed serializer
#[derive(Debug, Clone)]
pub struct FeedQuery {
    layouts: Regex,
    limit: usize,
    tz: Tz,
}

impl FeedQuery {
    pub fn new(layouts: &str, limit: usize, tz: Tz) -> Result<Self, FolioError> {
        let layouts = Regex::new(layouts).map_err(|source| FolioError::InvalidPattern {
            kind: "layout",
            pattern: layouts.to_string(),
            source,
        })?;
        Ok(Self { layouts, limit, tz })
    }

    /// Build the query from the `feed:` config block
    pub fn from_config(config: &SiteConfig) -> Result<Self, FolioError> {
        Self::new(&config.feed.layouts, config.feed.limit, config.tz()?)
    }

    /// Whether a document may appear in the feed at all
    pub fn is_eligible(&self, doc: &ContentDocument) -> bool {
        !doc.frontmatter.draft && doc.frontmatter.layout_matches(&self.layouts)
    }

    /// Eligible documents, newest first, at most `limit` of them
    ///
    /// Documents without a parseable date sort after all dated ones and
    /// otherwise keep their input order.
    pub fn run(&self, documents: &[ContentDocument]) -> Vec<ContentDocument> {
        let mut selected: Vec<(Option<i64>, &ContentDocument)> = documents
            .iter()
            .filter(|doc| self.is_eligible(doc))
            .map(|doc| {
                let timestamp = doc
                    .frontmatter
                    .parse_date(&self.tz)
                    .map(|dt| dt.timestamp());
                (timestamp, doc)
            })
            .collect();

        selected.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        selected
            .into_iter()
            .take(self.limit)
            .map(|(_, doc)| doc.clone())
            .collect()
    }
}
