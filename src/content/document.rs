//! Content document model

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::FrontMatter;

/// One authored post, project or page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub frontmatter: FrontMatter,

    /// HTML produced by the markdown transform
    #[serde(rename = "html")]
    pub rendered_body: String,

    /// URL path fragment, unique per document
    pub slug: String,

    /// Source file path relative to the content directory
    #[serde(default)]
    pub source: String,
}

impl ContentDocument {
    pub fn new(
        frontmatter: FrontMatter,
        rendered_body: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            frontmatter,
            rendered_body: rendered_body.into(),
            slug: slug.into(),
            source: String::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    pub fn layout(&self) -> Option<&str> {
        self.frontmatter.layout.as_deref()
    }

    pub fn is_draft(&self) -> bool {
        self.frontmatter.draft
    }
}

/// Derive a slug from a file path relative to the content directory
///
/// `articles/hello.md` becomes `/articles/hello/` and an `index` file maps
/// to its directory (`about/index.md` becomes `/about/`).
pub fn slug_from_path(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    let mut parts: Vec<String> = without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.last().map(|p| p == "index").unwrap_or(false) {
        parts.pop();
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

/// Normalize a frontmatter `path` override into a slug
///
/// Paths that name a file (`/404.html`) keep their form; anything else is
/// wrapped in slashes.
pub fn normalize_slug(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    let names_file = trimmed
        .rsplit('/')
        .next()
        .map(|last| last.contains('.'))
        .unwrap_or(false);

    if names_file {
        format!("/{}", trimmed)
    } else {
        format!("/{}/", trimmed)
    }
}
