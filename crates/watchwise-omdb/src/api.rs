use serde::Deserialize;
use watchwise_models::{MovieDetails, MovieSummary};

use crate::error::OmdbError;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search")]
    search: Option<Vec<RawSearchItem>>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Poster")]
    poster: String,
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Released")]
    released: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
}

/// OMDb fills absent fields with the literal "N/A"
fn opt_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "N/A")
}

/// Parse a runtime like "148 min" into minutes.
fn parse_runtime(value: Option<String>) -> Option<u32> {
    opt_field(value)?
        .split_whitespace()
        .next()?
        .parse::<u32>()
        .ok()
}

fn parse_rating(value: Option<String>) -> Option<f64> {
    opt_field(value)?.parse::<f64>().ok()
}

fn api_failure(error: Option<String>) -> OmdbError {
    let message = error.unwrap_or_else(|| "unspecified error".to_string());
    if message.to_lowercase().contains("not found") {
        OmdbError::NotFound
    } else {
        OmdbError::Api(message)
    }
}

/// Decode a search response body into summaries, in response order.
pub fn parse_search_body(body: &str) -> Result<Vec<MovieSummary>, OmdbError> {
    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| OmdbError::Malformed(e.to_string()))?;

    if envelope.response != "True" {
        return Err(api_failure(envelope.error));
    }

    let items = envelope
        .search
        .ok_or_else(|| OmdbError::Malformed("success response without Search array".to_string()))?;

    Ok(items
        .into_iter()
        .map(|item| MovieSummary {
            imdb_id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster: opt_field(Some(item.poster)),
        })
        .collect())
}

/// Decode a detail lookup body. Missing or unparsable fields become `None`;
/// only a missing id/title fails the decode.
pub fn parse_detail_body(body: &str) -> Result<MovieDetails, OmdbError> {
    let envelope: DetailEnvelope =
        serde_json::from_str(body).map_err(|e| OmdbError::Malformed(e.to_string()))?;

    if envelope.response != "True" {
        return Err(api_failure(envelope.error));
    }

    let imdb_id = envelope
        .imdb_id
        .ok_or_else(|| OmdbError::Malformed("detail response without imdbID".to_string()))?;
    let title = envelope
        .title
        .ok_or_else(|| OmdbError::Malformed("detail response without Title".to_string()))?;

    Ok(MovieDetails {
        imdb_id,
        title,
        year: envelope.year.unwrap_or_default(),
        poster: opt_field(envelope.poster),
        runtime_minutes: parse_runtime(envelope.runtime),
        imdb_rating: parse_rating(envelope.imdb_rating),
        released: opt_field(envelope.released),
        plot: opt_field(envelope.plot),
        actors: opt_field(envelope.actors),
        director: opt_field(envelope.director),
        genre: opt_field(envelope.genre),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATRIX_SEARCH: &str = r#"{
        "Search": [
            {"Title": "The Matrix", "Year": "1999", "imdbID": "tt0133093", "Type": "movie", "Poster": "https://m.media-amazon.com/matrix.jpg"},
            {"Title": "The Matrix Reloaded", "Year": "2003", "imdbID": "tt0234215", "Type": "movie", "Poster": "https://m.media-amazon.com/reloaded.jpg"},
            {"Title": "The Matrix Revolutions", "Year": "2003", "imdbID": "tt0242653", "Type": "movie", "Poster": "N/A"}
        ],
        "totalResults": "3",
        "Response": "True"
    }"#;

    #[test]
    fn test_search_parses_exactly_the_search_array() {
        let movies = parse_search_body(MATRIX_SEARCH).unwrap();
        assert_eq!(movies.len(), 3);
        assert_eq!(movies[0].imdb_id, "tt0133093");
        assert_eq!(movies[0].title, "The Matrix");
        assert_eq!(movies[0].year, "1999");
        assert_eq!(
            movies[0].poster.as_deref(),
            Some("https://m.media-amazon.com/matrix.jpg")
        );
        assert_eq!(movies[1].imdb_id, "tt0234215");
        assert_eq!(movies[2].imdb_id, "tt0242653");
        assert_eq!(movies[2].poster, None); // "N/A" poster
    }

    #[test]
    fn test_search_not_found_maps_to_not_found() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let err = parse_search_body(body).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_search_other_api_failure() {
        let body = r#"{"Response": "False", "Error": "Invalid API key!"}"#;
        match parse_search_body(body).unwrap_err() {
            OmdbError::Api(msg) => assert_eq!(msg, "Invalid API key!"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_search_garbage_body_is_malformed() {
        assert!(matches!(
            parse_search_body("<html>oops</html>"),
            Err(OmdbError::Malformed(_))
        ));
    }

    #[test]
    fn test_detail_parses_numeric_fields() {
        let body = r#"{
            "Title": "Inception", "Year": "2010", "Released": "16 Jul 2010",
            "Runtime": "148 min", "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Plot": "A thief who steals corporate secrets...",
            "Poster": "https://m.media-amazon.com/inception.jpg",
            "imdbRating": "8.8", "imdbID": "tt1375666", "Response": "True"
        }"#;
        let details = parse_detail_body(body).unwrap();
        assert_eq!(details.imdb_id, "tt1375666");
        assert_eq!(details.runtime_minutes, Some(148));
        assert_eq!(details.imdb_rating, Some(8.8));
        assert_eq!(details.director.as_deref(), Some("Christopher Nolan"));
        assert_eq!(details.released.as_deref(), Some("16 Jul 2010"));
    }

    #[test]
    fn test_detail_na_fields_become_none() {
        let body = r#"{
            "Title": "Obscure Short", "Year": "1932", "Released": "N/A",
            "Runtime": "N/A", "Genre": "N/A", "Director": "N/A",
            "Actors": "N/A", "Plot": "N/A", "Poster": "N/A",
            "imdbRating": "N/A", "imdbID": "tt0000001", "Response": "True"
        }"#;
        let details = parse_detail_body(body).unwrap();
        assert_eq!(details.runtime_minutes, None);
        assert_eq!(details.imdb_rating, None);
        assert_eq!(details.plot, None);
        assert_eq!(details.poster, None);
    }

    #[test]
    fn test_detail_not_found() {
        let body = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        match parse_detail_body(body).unwrap_err() {
            OmdbError::Api(msg) => assert_eq!(msg, "Incorrect IMDb ID."),
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
