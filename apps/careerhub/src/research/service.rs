use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::research::client::SearchProvider;
use crate::research::extract::{aggregate, ResearchInsights};
use crate::research::fanout::{run_queries, QueryResult};
use crate::research::kinds::ResearchKind;

pub const MAX_QUERIES: usize = 8;
const MAX_SLUG_LEN: usize = 200;

/// Aggregated outcome of one research request, before persistence.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchOutcome {
    pub kind: ResearchKind,
    pub slug: String,
    pub queries: Vec<String>,
    pub results: Vec<QueryResult>,
    pub insights: ResearchInsights,
    pub researched_at: DateTime<Utc>,
}

/// Resolves the query list: caller overrides win, blanks are dropped, and an
/// empty override falls back to the kind's defaults.
pub fn resolve_queries(
    kind: ResearchKind,
    slug: &str,
    overrides: Option<&[String]>,
) -> Result<Vec<String>, AppError> {
    let custom: Vec<String> = overrides
        .unwrap_or_default()
        .iter()
        .map(|q| q.trim())
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect();

    if custom.len() > MAX_QUERIES {
        return Err(AppError::Validation(format!(
            "At most {MAX_QUERIES} queries are allowed, got {}",
            custom.len()
        )));
    }
    if custom.is_empty() {
        Ok(kind.default_queries(slug))
    } else {
        Ok(custom)
    }
}

pub fn validate_slug(slug: &str) -> Result<&str, AppError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Err(AppError::Validation("slug is required".to_string()));
    }
    if slug.chars().count() > MAX_SLUG_LEN {
        return Err(AppError::Validation(format!(
            "slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    Ok(slug)
}

/// Runs every query in parallel and aggregates the successful answers.
/// Fails only when no query succeeded.
pub async fn run_research(
    provider: &dyn SearchProvider,
    kind: ResearchKind,
    slug: &str,
    overrides: Option<&[String]>,
) -> Result<ResearchOutcome, AppError> {
    let slug = validate_slug(slug)?;
    let queries = resolve_queries(kind, slug, overrides)?;

    let results = run_queries(provider, kind.system_prompt(), &queries).await;
    let insights = aggregate(&results);

    if insights.successful_queries == 0 {
        let first_error = results
            .iter()
            .find_map(|r| r.error.as_deref())
            .unwrap_or("no queries were run");
        return Err(AppError::Research(format!(
            "All {} {kind} research queries for '{slug}' failed: {first_error}",
            results.len()
        )));
    }

    info!(
        "{kind} research for '{slug}': {}/{} queries succeeded, {} citations",
        insights.successful_queries,
        results.len(),
        insights.citations.len()
    );

    Ok(ResearchOutcome {
        kind,
        slug: slug.to_string(),
        queries,
        results,
        insights,
        researched_at: Utc::now(),
    })
}
