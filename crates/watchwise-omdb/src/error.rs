use thiserror::Error;

#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered but found nothing for the query or id.
    #[error("movie not found")]
    NotFound,

    /// Any other API-reported failure (bad key, rate limit, ...).
    #[error("OMDb error: {0}")]
    Api(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl OmdbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OmdbError::NotFound)
    }
}
