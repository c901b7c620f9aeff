//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::ContentDocument;
use crate::error::FolioError;
use crate::query::{collect_routes, FeedQuery, RouteQuery};
use crate::serialize::{serialize_feed, serialize_sitemap};
use crate::Folio;

/// List site content by type
///
/// `feed` and `route` show exactly what the next build would write; with
/// `json` they print the serialized entries.
pub fn run(folio: &Folio, content_type: &str, json: bool) -> Result<()> {
    let documents = ContentLoader::new(folio).load_documents()?;
    let config = &folio.config;

    match content_type {
        "post" | "posts" => print_documents("Posts", &by_layout(&documents, "post")),
        "project" | "projects" => {
            print_documents("Projects", &by_layout(&documents, "project"))
        }
        "page" | "pages" => print_documents("Pages", &by_layout(&documents, "page")),
        "draft" | "drafts" => {
            let drafts: Vec<_> = documents.iter().filter(|d| d.is_draft()).collect();
            print_documents("Drafts", &drafts)
        }
        "feed" => {
            let selected = FeedQuery::from_config(config)?.run(&documents);
            let entries = serialize_feed(&config.site, &selected);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("Feed entries ({}):", entries.len());
                for entry in &entries {
                    println!(
                        "  {} - {} [{}]",
                        entry.date.as_deref().unwrap_or("----------"),
                        entry.title,
                        entry.url
                    );
                }
            }
        }
        "route" | "routes" => {
            let routes = RouteQuery::from_config(config)?.run(&collect_routes(config, &documents));
            let entries = serialize_sitemap(&config.site, &routes);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("Routes ({}):", entries.len());
                for entry in &entries {
                    println!("  {}", entry.url);
                }
            }
        }
        _ => return Err(FolioError::UnknownListType(content_type.to_string()).into()),
    }

    Ok(())
}

fn by_layout<'a>(documents: &'a [ContentDocument], layout: &str) -> Vec<&'a ContentDocument> {
    documents
        .iter()
        .filter(|d| d.layout() == Some(layout))
        .collect()
}

fn print_documents(heading: &str, documents: &[&ContentDocument]) {
    println!("{} ({}):", heading, documents.len());
    for doc in documents {
        println!(
            "  {} - {} [{}]{}",
            doc.frontmatter.date.as_deref().unwrap_or("----------"),
            doc.title(),
            doc.source,
            if doc.is_draft() { " (draft)" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_type() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let err = run(&folio, "tags", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FolioError>(),
            Some(FolioError::UnknownListType(t)) if t == "tags"
        ));
    }

    #[test]
    fn test_known_types() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        for kind in ["post", "project", "page", "draft", "feed", "route"] {
            run(&folio, kind, false).unwrap();
        }
        run(&folio, "feed", true).unwrap();
    }
}
