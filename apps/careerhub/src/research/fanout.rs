use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::research::client::SearchProvider;

/// Outcome of one sub-query. Exactly one of `answer` / `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default)]
    pub citations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    pub fn is_success(&self) -> bool {
        self.answer.is_some()
    }
}

/// Issues every query at once and waits for all of them. Failures are recorded
/// on their result, never retried, and never abort the other queries.
pub async fn run_queries(
    provider: &dyn SearchProvider,
    system: &str,
    queries: &[String],
) -> Vec<QueryResult> {
    let calls = queries.iter().map(|query| async move {
        match provider.search(system, query).await {
            Ok(answer) => QueryResult {
                query: query.clone(),
                answer: Some(answer.content),
                citations: answer.citations,
                error: None,
            },
            Err(e) => {
                warn!("Research query failed ({query}): {e}");
                QueryResult {
                    query: query.clone(),
                    answer: None,
                    citations: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    });
    join_all(calls).await
}
