use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;
use crate::research::client::{PerplexityClient, SearchProvider};

const MAX_DB_CONNECTIONS: u32 = 10;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Hosted Postgres holding the `*_research` tables.
    pub db: PgPool,
    /// Search backend for research requests. Perplexity in production.
    pub search: Arc<dyn SearchProvider>,
}

impl AppState {
    pub async fn connect(config: &Config) -> Result<Self> {
        info!("Connecting to PostgreSQL...");
        let db = PgPoolOptions::new()
            .max_connections(MAX_DB_CONNECTIONS)
            .connect(&config.database_url)
            .await
            .context("failed to connect to DATABASE_URL")?;
        info!("PostgreSQL connection pool established");

        let search = PerplexityClient::new(
            config.perplexity_api_key.clone(),
            config.perplexity_base_url.clone(),
        )?;
        info!(
            "Search client initialized ({}, model {})",
            config.perplexity_base_url,
            crate::research::client::MODEL
        );

        Ok(Self {
            db,
            search: Arc::new(search),
        })
    }
}
