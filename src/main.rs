//! CLI entry point for folio-rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "RSS feed and sitemap generation for a Markdown blog and portfolio", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post, project or page
    New {
        /// Layout to use (post, project, page)
        #[arg(short, long, default_value = "post")]
        layout: String,

        /// Mark the document as a draft
        #[arg(long)]
        draft: bool,

        /// Title of the new document
        title: String,

        /// Folder name for the new document (defaults to the slugified title)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Write rss.xml and sitemap.xml
    #[command(alias = "b")]
    Build {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Delete the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, project, page, draft, feed, route)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print serialized feed/sitemap entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio_rs::Folio::new(&target_dir)?.init()?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New {
            layout,
            draft,
            title,
            path,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let file = folio_rs::commands::new::create_document(
                &folio,
                &title,
                &layout,
                draft,
                path.as_deref(),
            )?;
            println!("Created: {:?}", file);
        }

        Commands::Build { watch } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let report = folio.build()?;
            println!(
                "Wrote {} feed entries to {:?} and {} urls to {:?}",
                report.feed_entries, report.feed_path, report.sitemap_entries, report.sitemap_path
            );

            if watch {
                folio_rs::commands::build::watch(&folio).await?;
            }
        }

        Commands::Clean => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type, json } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &r#type, json)?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
