//! Build-time sitemap generator. Takes no arguments: writes `public/sitemap-*.xml`
//! plus the `public/sitemap.xml` index and prints per-file URL counts.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use careerhub::sitemap::{self, Taxonomy, DEFAULT_OUTPUT_DIR};

fn main() {
    // stdout carries the report; logs go to stderr
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        error!("Sitemap generation failed: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // One date for the whole run
    let lastmod = Utc::now().date_naive();
    let out_dir = Path::new(DEFAULT_OUTPUT_DIR);
    info!("Generating sitemaps for {} (lastmod {lastmod})", sitemap::BASE_URL);

    let report = sitemap::generate(out_dir, &Taxonomy::builtin(), lastmod)
        .with_context(|| format!("writing sitemaps to {}", out_dir.display()))?;

    for file in &report.files {
        println!("{}: {} URLs", file.filename, file.urls);
    }
    println!("Total: {} URLs", report.total_urls);
    println!("Index: {}", report.index_path.display());
    Ok(())
}
