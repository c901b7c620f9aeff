//! Create a new post, project or page

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::error::FolioError;
use crate::Folio;

/// Create a new document and return its path
///
/// Posts go under `articles/`, projects under `projects/`, anything else at
/// the top of the content directory. Each document gets its own folder with
/// an `index.md` so that co-located assets share its slug.
pub fn create_document(
    folio: &Folio,
    title: &str,
    layout: &str,
    draft: bool,
    path: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();
    let name = path
        .map(|p| p.trim_matches('/').to_string())
        .unwrap_or_else(|| slug::slugify(title));

    let section = match layout {
        "post" => Some("articles"),
        "project" => Some("projects"),
        _ => None,
    };
    let target_dir = match section {
        Some(section) => folio.content_dir.join(section).join(&name),
        None => folio.content_dir.join(&name),
    };
    let file_path = target_dir.join("index.md");

    if file_path.exists() {
        return Err(FolioError::AlreadyExists(file_path).into());
    }

    fs::create_dir_all(&target_dir)?;

    let title = serde_yaml::to_string(title)?;
    let content = format!(
        r#"---
title: {}
date: {}
layout: {}
draft: {}
description: ''
---
"#,
        title.trim_end(),
        now.format("%Y-%m-%d %H:%M:%S"),
        layout,
        draft
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created {} {:?}", layout, file_path);

    Ok(file_path)
}
