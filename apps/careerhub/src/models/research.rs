use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// One row of `article_research`, `persona_research` or `resume_research`.
/// `slug` is the primary key; re-running research for a slug overwrites the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResearchRow {
    pub slug: String,
    pub queries: Value,
    pub results: Value,
    pub insights: Value,
    pub citations: Vec<String>,
    pub researched_at: DateTime<Utc>,
}
