use reqwest::Client;
use tracing::debug;
use watchwise_models::{MovieDetails, MovieSummary};

use crate::api;
use crate::error::OmdbError;
use crate::traits::MovieLookup;

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Title search: `?apikey=K&s=<query>`.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        let url = format!(
            "{}?apikey={}&s={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query)
        );
        debug!(query, "Searching OMDb");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(OmdbError::Api(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let movies = api::parse_search_body(&body)?;
        debug!(query, count = movies.len(), "Search complete");
        Ok(movies)
    }

    /// Single-title lookup: `?apikey=K&i=<imdb id>`.
    pub async fn details(&self, imdb_id: &str) -> Result<MovieDetails, OmdbError> {
        let url = format!(
            "{}?apikey={}&i={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(imdb_id)
        );
        debug!(imdb_id, "Fetching movie details");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(OmdbError::Api(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        api::parse_detail_body(&body)
    }
}

#[async_trait::async_trait]
impl MovieLookup for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        self.search(query).await
    }

    async fn details(&self, imdb_id: &str) -> Result<MovieDetails, OmdbError> {
        self.details(imdb_id).await
    }
}
