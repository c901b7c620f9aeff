//! Configuration module

mod plugins;
mod site;

pub use plugins::AnalyticsConfig;
pub use plugins::FeedConfig;
pub use plugins::MarkdownConfig;
pub use plugins::ResponsiveIframeConfig;
pub use plugins::SitemapConfig;
pub use site::Author;
pub use site::MenuItem;
pub use site::SiteConfig;
pub use site::SiteMetadata;
