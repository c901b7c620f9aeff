//! Serializers - pure mappings from queried data to output entries

mod feed;
mod sitemap;

pub use feed::{serialize_feed, CustomElement, FeedEntry, CONTENT_ENCODED};
pub use sitemap::{serialize_sitemap, SitemapEntry, CHANGEFREQ, PRIORITY};
