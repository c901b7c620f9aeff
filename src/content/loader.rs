//! Content loader - loads documents from the content directory

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::document::{normalize_slug, slug_from_path};
use super::{ContentDocument, FrontMatter, MarkdownRenderer};
use crate::Folio;

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    folio: &'a Folio,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        let renderer = MarkdownRenderer::with_config(&folio.config.markdown);
        Self { folio, renderer }
    }

    /// Load every markdown document, drafts included, in path order
    pub fn load_documents(&self) -> Result<Vec<ContentDocument>> {
        let content_dir = &self.folio.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            match self.load_document(path) {
                Ok(doc) => {
                    tracing::debug!("Loaded {} -> {}", doc.source, doc.slug);
                    documents.push(doc);
                }
                Err(e) => {
                    tracing::warn!("Failed to load document {:?}: {}", path, e);
                }
            }
        }

        Ok(documents)
    }

    /// Load a single document from a file
    fn load_document(&self, path: &Path) -> Result<ContentDocument> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let (mut fm, body) = FrontMatter::parse(&content)?;

        let relative = path.strip_prefix(&self.folio.content_dir).unwrap_or(path);

        if fm.title.is_empty() {
            fm.title = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string();
        }

        let slug = match fm.path.as_deref() {
            Some(explicit) => normalize_slug(explicit),
            None => slug_from_path(relative),
        };

        let html = self.renderer.render(body)?;

        let mut doc = ContentDocument::new(fm, html, slug);
        doc.source = relative.to_string_lossy().to_string();
        Ok(doc)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Folio;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_documents() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        write(
            &content,
            "articles/hello/index.md",
            "---\ntitle: Hello\ndate: 2020-01-01\nlayout: post\n---\nHi *there*",
        );
        write(
            &content,
            "about.md",
            "---\ntitle: About\nlayout: page\npath: /about-me\n---\nMe",
        );
        write(&content, "notes.txt", "ignored");

        let folio = Folio::new(tmp.path()).unwrap();
        let docs = ContentLoader::new(&folio).load_documents().unwrap();

        assert_eq!(docs.len(), 2);
        let about = docs.iter().find(|d| d.title() == "About").unwrap();
        assert_eq!(about.slug, "/about-me/");
        assert_eq!(about.source, "about.md");

        let hello = docs.iter().find(|d| d.title() == "Hello").unwrap();
        assert_eq!(hello.slug, "/articles/hello/");
        assert!(hello.rendered_body.contains("<em>there</em>"));
        assert_eq!(hello.frontmatter.date.as_deref(), Some("2020-01-01"));
    }

    #[test]
    fn test_title_falls_back_to_filename() {
        let tmp = TempDir::new().unwrap();
        write(&tmp.path().join("content"), "untitled-note.md", "Just text");

        let folio = Folio::new(tmp.path()).unwrap();
        let docs = ContentLoader::new(&folio).load_documents().unwrap();
        assert_eq!(docs[0].title(), "untitled-note");
        assert_eq!(docs[0].slug, "/untitled-note/");
    }

    #[test]
    fn test_loosely_typed_frontmatter() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        write(
            &content,
            "articles/open/index.md",
            "---\ntitle:\ndate: 2020-01-01\nlayout: post\ndraft:\n---\nBody",
        );
        write(
            &content,
            "articles/hidden/index.md",
            "---\ntitle: Hidden\nlayout: post\ndraft: \"true\"\n---\nLater",
        );

        let folio = Folio::new(tmp.path()).unwrap();
        let docs = ContentLoader::new(&folio).load_documents().unwrap();
        assert_eq!(docs.len(), 2);

        let open = docs.iter().find(|d| d.slug == "/articles/open/").unwrap();
        assert_eq!(open.layout(), Some("post"));
        assert!(!open.is_draft());
        assert_eq!(open.title(), "index");
        assert_eq!(open.rendered_body, "<p>Body</p>\n");

        let hidden = docs.iter().find(|d| d.slug == "/articles/hidden/").unwrap();
        assert!(hidden.is_draft());
        assert_eq!(hidden.layout(), Some("post"));
    }

    #[test]
    fn test_missing_content_dir() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert!(ContentLoader::new(&folio).load_documents().unwrap().is_empty());
    }
}
