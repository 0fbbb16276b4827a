use axum::Json;
use chrono::Utc;

use crate::sitemap::enumerator::{summarize, SitemapSummary};
use crate::sitemap::taxonomy::Taxonomy;

/// GET /api/v1/sitemap/summary
/// URL counts per sitemap file, computed by the same enumerator the build uses.
pub async fn handle_sitemap_summary() -> Json<SitemapSummary> {
    Json(summarize(&Taxonomy::builtin(), Utc::now().date_naive()))
}
