use serde::{Deserialize, Serialize};

/// One row of a search response. Created per search, discarded on the next.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String, // OMDb returns ranges like "2010–2015" for series
    pub poster: Option<String>,
}

/// Full metadata for a single selected title.
///
/// OMDb fills absent fields with the literal string "N/A"; those (and any
/// unparsable numeric fields) arrive here as `None` rather than failing the
/// whole fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub imdb_rating: Option<f64>,
    pub released: Option<String>,
    pub plot: Option<String>,
    pub actors: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
}
