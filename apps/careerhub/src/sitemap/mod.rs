// Sitemap generation: taxonomy tables → enumerator → XML serializer → file writer.
// One enumerator serves both the build-time generator and the runtime summary endpoint.

pub mod data;
pub mod entry;
pub mod enumerator;
pub mod handlers;
pub mod taxonomy;
pub mod writer;
pub mod xml;

pub const BASE_URL: &str = "https://indeedflex.com";
pub const INDEX_FILENAME: &str = "sitemap.xml";
pub const DEFAULT_OUTPUT_DIR: &str = "public";

pub use entry::{ChangeFreq, Priority, SitemapEntry};
pub use enumerator::{enumerate, enumerate_all, summarize, SitemapCategory, SitemapSummary};
pub use taxonomy::Taxonomy;
pub use writer::{generate, GenerationReport, SitemapError};
