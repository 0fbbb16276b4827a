// Research functions: fan out search queries for a slug, extract fields from the
// answers, and optionally upsert the aggregate into the hosted database.
// All search calls go through `client::SearchProvider`.

pub mod client;
pub mod extract;
pub mod fanout;
pub mod handlers;
pub mod kinds;
pub mod prompts;
pub mod service;
pub mod store;

pub use client::{PerplexityClient, ResearchError, SearchAnswer, SearchProvider};
pub use kinds::ResearchKind;
