//! Search client: the single point of entry for calls to the Perplexity API.
//!
//! Research handlers talk to `dyn SearchProvider`, never to `reqwest` directly,
//! so tests can swap in a canned provider.
//!
//! Failed calls are returned as errors immediately. There is no retry: a failed
//! sub-query is recorded on its result and left out of aggregation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";
/// The search model used for all research queries.
pub const MODEL: &str = "sonar";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("search returned empty content")]
    EmptyContent,
}

/// Answer text plus the sources the search engine cited for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchAnswer {
    pub content: String,
    pub citations: Vec<String>,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, system: &str, query: &str) -> Result<SearchAnswer, ResearchError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    citations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Perplexity chat-completions client.
#[derive(Clone)]
pub struct PerplexityClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PerplexityClient {
    pub fn new(api_key: String, base_url: impl Into<String>) -> Result<Self, ResearchError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SearchProvider for PerplexityClient {
    async fn search(&self, system: &str, query: &str) -> Result<SearchAnswer, ResearchError> {
        let body = ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: query,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(ResearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&text)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(ResearchError::EmptyContent)?;

        debug!(
            "Search succeeded: {} chars, {} citations",
            content.len(),
            parsed.citations.len()
        );

        Ok(SearchAnswer {
            content,
            citations: parsed.citations,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn client_for(server: &MockServer) -> PerplexityClient {
        PerplexityClient::new("test-key".to_string(), server.uri()).unwrap()
    }

    #[tokio::test]
    async fn test_search_parses_content_and_citations() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "Forklift drivers earn $18-$24 per hour."}}],
                "citations": ["https://www.bls.gov/ooh/"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let answer = client_for(&server)
            .await
            .search("system", "forklift pay")
            .await
            .unwrap();
        assert_eq!(answer.content, "Forklift drivers earn $18-$24 per hour.");
        assert_eq!(answer.citations, ["https://www.bls.gov/ooh/"]);
    }

    #[tokio::test]
    async fn test_api_error_message_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": {"message": "Invalid API key"}})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .search("system", "q")
            .await
            .unwrap_err();
        match err {
            ResearchError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .search("system", "q")
            .await
            .unwrap_err();
        assert!(matches!(err, ResearchError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_empty_choices_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .search("system", "q")
            .await
            .unwrap_err();
        assert!(matches!(err, ResearchError::EmptyContent));
    }
}
