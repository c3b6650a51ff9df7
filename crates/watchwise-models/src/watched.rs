use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::movie::MovieDetails;

/// A movie the user has rated and saved. Persists across sessions; the store
/// guarantees at most one entry per `imdb_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedMovie {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: Option<String>,
    pub imdb_rating: Option<f64>,
    pub runtime_minutes: Option<u32>,
    /// User star rating, 1-10.
    pub user_rating: u8,
    pub rated_at: DateTime<Utc>,
}

impl WatchedMovie {
    pub fn from_details(details: &MovieDetails, user_rating: u8) -> Self {
        Self {
            imdb_id: details.imdb_id.clone(),
            title: details.title.clone(),
            year: details.year.clone(),
            poster: details.poster.clone(),
            imdb_rating: details.imdb_rating,
            runtime_minutes: details.runtime_minutes,
            user_rating,
            rated_at: Utc::now(),
        }
    }
}
