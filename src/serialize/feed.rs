//! Feed serializer

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::SiteMetadata;
use crate::content::ContentDocument;

/// Key of the custom element carrying the rendered body
pub const CONTENT_ENCODED: &str = "content:encoded";

/// Extra RSS elements attached to an item, in emission order
pub type CustomElement = IndexMap<String, String>;

/// One syndicated item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub date: Option<String>,
    pub layout: Option<String>,
    pub draft: bool,
    pub description: Option<String>,
    pub url: String,
    pub guid: String,
    pub custom_elements: Vec<CustomElement>,
}

/// Map already-selected documents to feed entries
///
/// No filtering or sorting happens here; output order is input order.
pub fn serialize_feed(site: &SiteMetadata, documents: &[ContentDocument]) -> Vec<FeedEntry> {
    documents
        .iter()
        .map(|doc| feed_entry(site, doc))
        .collect()
}

fn feed_entry(site: &SiteMetadata, doc: &ContentDocument) -> FeedEntry {
    let fm = &doc.frontmatter;
    let url = format!("{}{}", site.url, doc.slug);

    let mut content = CustomElement::new();
    content.insert(CONTENT_ENCODED.to_string(), doc.rendered_body.clone());

    FeedEntry {
        title: fm.title.clone(),
        date: fm.date.clone(),
        layout: fm.layout.clone(),
        draft: fm.draft,
        description: fm.description.clone(),
        guid: url.clone(),
        url,
        custom_elements: vec![content],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    fn site() -> SiteMetadata {
        SiteMetadata {
            url: "https://example.com".to_string(),
            ..Default::default()
        }
    }

    fn hello_world() -> ContentDocument {
        let fm = FrontMatter {
            title: "Hello".to_string(),
            date: Some("2020-01-01".to_string()),
            layout: Some("post".to_string()),
            draft: false,
            description: Some("first post".to_string()),
            ..Default::default()
        };
        ContentDocument::new(fm, "<p>Hi</p>", "/hello-world/")
    }

    #[test]
    fn test_hello_world_entry() {
        let entries = serialize_feed(&site(), &[hello_world()]);

        let mut content = CustomElement::new();
        content.insert("content:encoded".to_string(), "<p>Hi</p>".to_string());
        let expected = FeedEntry {
            title: "Hello".to_string(),
            date: Some("2020-01-01".to_string()),
            layout: Some("post".to_string()),
            draft: false,
            description: Some("first post".to_string()),
            url: "https://example.com/hello-world/".to_string(),
            guid: "https://example.com/hello-world/".to_string(),
            custom_elements: vec![content],
        };
        assert_eq!(entries, vec![expected]);
    }

    #[test]
    fn test_entry_json_shape() {
        let entries = serialize_feed(&site(), &[hello_world()]);
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Hello",
                "date": "2020-01-01",
                "layout": "post",
                "draft": false,
                "description": "first post",
                "url": "https://example.com/hello-world/",
                "guid": "https://example.com/hello-world/",
                "custom_elements": [{"content:encoded": "<p>Hi</p>"}]
            })
        );
    }

    #[test]
    fn test_date_and_description_match_frontmatter() {
        let doc = hello_world();
        let entry = &serialize_feed(&site(), std::slice::from_ref(&doc))[0];
        assert_eq!(entry.date, doc.frontmatter.date);
        assert_eq!(entry.description, doc.frontmatter.description);
    }

    #[test]
    fn test_missing_description_is_empty() {
        let mut doc = hello_world();
        doc.frontmatter.description = None;
        let entries = serialize_feed(&site(), &[doc]);
        assert_eq!(entries[0].description, None);
        assert_eq!(entries[0].title, "Hello");
    }

    #[test]
    fn test_url_is_plain_concatenation() {
        let meta = SiteMetadata {
            url: "https://example.com/".to_string(),
            ..Default::default()
        };
        let mut doc = hello_world();
        doc.slug = "posts/x".to_string();
        let entry = &serialize_feed(&meta, &[doc])[0];
        assert_eq!(entry.url, "https://example.com/posts/x");
        assert_eq!(entry.guid, entry.url);
    }

    #[test]
    fn test_order_preserved() {
        let docs: Vec<_> = ["/c/", "/a/", "/b/"]
            .iter()
            .map(|slug| {
                let mut doc = hello_world();
                doc.slug = slug.to_string();
                doc
            })
            .collect();
        let urls: Vec<String> = serialize_feed(&site(), &docs)
            .into_iter()
            .map(|e| e.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://example.com/c/",
                "https://example.com/a/",
                "https://example.com/b/"
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let docs = vec![hello_world(), hello_world()];
        let first = serde_json::to_string(&serialize_feed(&site(), &docs)).unwrap();
        let second = serde_json::to_string(&serialize_feed(&site(), &docs)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        assert!(serialize_feed(&site(), &[]).is_empty());
    }

    #[test]
    fn test_content_encoded() {
        let entry = &serialize_feed(&site(), &[hello_world()])[0];
        assert_eq!(entry.custom_elements.len(), 1);
        assert_eq!(
            entry.custom_elements[0].get(CONTENT_ENCODED).map(String::as_str),
            Some("<p>Hi</p>")
        );
    }
}
