use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::models::research::ResearchRow;
use crate::research::extract::ResearchInsights;
use crate::research::fanout::QueryResult;
use crate::research::kinds::ResearchKind;
use crate::research::service::{run_research, validate_slug, ResearchOutcome};
use crate::research::store::{get_research, upsert_research};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub slug: String,
    #[serde(default)]
    pub queries: Option<Vec<String>>,
    /// Upsert the aggregated result into the kind's table.
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Serialize)]
pub struct ResearchResponse {
    pub success: bool,
    pub kind: ResearchKind,
    pub slug: String,
    pub results: Vec<QueryResult>,
    pub insights: ResearchInsights,
    pub citations: Vec<String>,
    pub researched_at: DateTime<Utc>,
    pub saved: bool,
}

fn parse_kind(kind: &str) -> Result<ResearchKind, AppError> {
    kind.parse().map_err(AppError::NotFound)
}

/// POST /api/research/:kind
pub async fn handle_research(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(req): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>, AppError> {
    let kind = parse_kind(&kind)?;
    let outcome = run_research(
        state.search.as_ref(),
        kind,
        &req.slug,
        req.queries.as_deref(),
    )
    .await?;

    // A failed save never fails the request: the research itself succeeded.
    let saved = if req.save {
        match save_outcome(&state, &outcome).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save {kind} research for '{}': {e:#}", outcome.slug);
                false
            }
        }
    } else {
        false
    };

    let ResearchOutcome {
        kind,
        slug,
        results,
        insights,
        researched_at,
        ..
    } = outcome;
    Ok(Json(ResearchResponse {
        success: true,
        kind,
        slug,
        results,
        citations: insights.citations.clone(),
        insights,
        researched_at,
        saved,
    }))
}

/// GET /api/research/:kind/:slug
pub async fn handle_get_research(
    State(state): State<AppState>,
    Path((kind, slug)): Path<(String, String)>,
) -> Result<Json<ResearchRow>, AppError> {
    let kind = parse_kind(&kind)?;
    let slug = validate_slug(&slug)?;
    let row = get_research(&state.db, kind, slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No {kind} research saved for '{slug}'")))?;
    Ok(Json(row))
}

async fn save_outcome(state: &AppState, outcome: &ResearchOutcome) -> anyhow::Result<()> {
    let row = ResearchRow {
        slug: outcome.slug.clone(),
        queries: serde_json::to_value(&outcome.queries)?,
        results: serde_json::to_value(&outcome.results)?,
        insights: serde_json::to_value(&outcome.insights)?,
        citations: outcome.insights.citations.clone(),
        researched_at: outcome.researched_at,
    };
    upsert_research(&state.db, outcome.kind, &row).await?;
    Ok(())
}
