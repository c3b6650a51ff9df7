use async_trait::async_trait;
use watchwise_models::{MovieDetails, MovieSummary};

use crate::error::OmdbError;

/// Seam between the metadata API and the core, so the search/detail flow can
/// be driven by a stub in tests.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError>;
    async fn details(&self, imdb_id: &str) -> Result<MovieDetails, OmdbError>;
}
