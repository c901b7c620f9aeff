//! Content module - loads documents and renders their markdown

mod document;
mod frontmatter;
pub mod loader;
mod markdown;

pub use document::{normalize_slug, slug_from_path, ContentDocument};
pub use frontmatter::{parse_date_string, FrontMatter};
pub use markdown::MarkdownRenderer;
