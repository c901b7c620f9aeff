//! Build rss.xml and sitemap.xml

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::loader::ContentLoader;
use crate::generator::{BuildReport, Generator};
use crate::{Folio, CONFIG_FILE};

/// Load content and write both outputs
pub fn run(folio: &Folio) -> Result<BuildReport> {
    let start = Instant::now();

    let loader = ContentLoader::new(folio);
    let documents = loader.load_documents()?;
    tracing::info!("Loaded {} documents", documents.len());

    let report = Generator::new(folio)?.generate(&documents)?;

    tracing::info!("Built in {:.2}s", start.elapsed().as_secs_f64());
    Ok(report)
}

/// Watch for file changes and rebuild
///
/// Configuration is reloaded on every rebuild so edits to `site.yml` apply
/// without restarting.
pub async fn watch(folio: &Folio) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if folio.content_dir.exists() {
        watcher.watch(&folio.content_dir, notify::RecursiveMode::Recursive)?;
    }

    let config_path = folio.base_dir.join(CONFIG_FILE);
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => {
                // Writes into the public directory never trigger a rebuild
                if event.paths.iter().all(|p| p.starts_with(&folio.public_dir)) {
                    continue;
                }
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, rebuilding...");
                    if let Err(e) = Folio::new(&folio.base_dir).and_then(|f| run(&f)) {
                        tracing::error!("Build failed: {}", e);
                    }
                    last_rebuild = Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
