//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::{Folio, CONFIG_FILE};

const DEFAULT_CONFIG: &str = r#"# folio-rs configuration

site:
  url: http://example.com
  title: My Folio
  subtitle: ''
  copyright: ''
  disqus_shortname: ''
  menu:
    - label: Articles
      path: /
    - label: Projects
      path: /projects/
    - label: About me
      path: /about/
    - label: Contact me
      path: /contact/
  author:
    name: John Doe
    email: ''
    twitter: ''
    github: ''
    medium: ''
    linkedin: ''

# Directory
content_dir: content
public_dir: public

# Frontmatter dates without an offset are read in this timezone (empty = UTC)
timezone: ''

feed:
  output: /rss.xml
  limit: 1000
  layouts: (post|project)

sitemap:
  output: /sitemap.xml
  exclude: /404/|/404.html|/dev-404-page/

markdown:
  highlight_theme: base16-ocean.dark
  line_numbers: false
  smartypants: true
  responsive_iframe:
    enable: true
    wrapper_style: 'margin-bottom: 1.0725rem'

analytics:
  tracking_id: ''

fonts:
  - roboto:400,400i,500,700
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("content/articles/hello-world"))?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::warn!("{:?} already exists, leaving it untouched", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
    }

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
layout: post
draft: false
description: The first post on this site.
---

Welcome! This post lives in `content/articles/hello-world/index.md`.

Run `folio-rs build` to write `public/rss.xml` and `public/sitemap.xml`.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    let post_path = target_dir.join("content/articles/hello-world/index.md");
    if !post_path.exists() {
        fs::write(post_path, sample_post)?;
    }

    Ok(())
}

/// Run the init command with an existing Folio instance
pub fn run(folio: &Folio) -> Result<()> {
    init_site(&folio.base_dir)
}
