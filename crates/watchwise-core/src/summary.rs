use watchwise_models::WatchedMovie;

/// Aggregate stats over the watched collection, shown above the list.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime_minutes: f64,
}

impl WatchedSummary {
    pub fn of(movies: &[WatchedMovie]) -> Self {
        Self {
            count: movies.len(),
            avg_imdb_rating: average(movies.iter().filter_map(|m| m.imdb_rating)),
            avg_user_rating: average(movies.iter().map(|m| f64::from(m.user_rating))),
            avg_runtime_minutes: average(
                movies.iter().filter_map(|m| m.runtime_minutes.map(f64::from)),
            ),
        }
    }
}

/// Mean of the values, 0 when there are none.
fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn watched(imdb_rating: Option<f64>, runtime: Option<u32>, user_rating: u8) -> WatchedMovie {
        WatchedMovie {
            imdb_id: "tt0000000".to_string(),
            title: "Test".to_string(),
            year: "2000".to_string(),
            poster: None,
            imdb_rating,
            runtime_minutes: runtime,
            user_rating,
            rated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_collection_averages_to_zero() {
        let summary = WatchedSummary::of(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_imdb_rating, 0.0);
        assert_eq!(summary.avg_user_rating, 0.0);
        assert_eq!(summary.avg_runtime_minutes, 0.0);
    }

    #[test]
    fn test_averages_over_present_values() {
        let movies = vec![
            watched(Some(8.8), Some(148), 10),
            watched(Some(8.5), Some(116), 9),
        ];
        let summary = WatchedSummary::of(&movies);
        assert_eq!(summary.count, 2);
        assert!((summary.avg_imdb_rating - 8.65).abs() < 1e-9);
        assert!((summary.avg_user_rating - 9.5).abs() < 1e-9);
        assert!((summary.avg_runtime_minutes - 132.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_fields_do_not_poison_averages() {
        let movies = vec![
            watched(Some(8.0), None, 8),
            watched(None, Some(100), 6),
        ];
        let summary = WatchedSummary::of(&movies);
        assert_eq!(summary.avg_imdb_rating, 8.0);
        assert_eq!(summary.avg_runtime_minutes, 100.0);
        assert_eq!(summary.avg_user_rating, 7.0);
    }
}
