use std::sync::Arc;

use futures::future::{AbortHandle, Abortable, Aborted};
use tokio::task::JoinHandle;
use tracing::debug;
use watchwise_models::{MovieDetails, MovieSummary};
use watchwise_omdb::{MovieLookup, OmdbError};

/// Queries shorter than this never reach the network; the result list and
/// error state are simply cleared.
pub const MIN_QUERY_LEN: usize = 3;

/// Outcome of a submitted query once it settles.
#[derive(Debug)]
pub enum SearchState {
    /// Query was too short; results and error cleared without a lookup.
    Cleared,
    Loaded(Vec<MovieSummary>),
    /// The API answered but had no matches.
    NotFound,
    /// Transport or API failure, rendered inline and never fatal.
    Failed(String),
    /// A newer query aborted this lookup. Not an error.
    Superseded,
}

impl SearchState {
    pub fn is_superseded(&self) -> bool {
        matches!(self, SearchState::Superseded)
    }
}

/// Tracks the single in-flight search lookup. Submitting a new query always
/// aborts the previous one, so only the latest query's results can ever be
/// observed.
pub struct SearchSession<L: MovieLookup + 'static> {
    lookup: Arc<L>,
    inflight: Option<AbortHandle>,
}

impl<L: MovieLookup + 'static> SearchSession<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup: Arc::new(lookup),
            inflight: None,
        }
    }

    /// Submit a query, superseding any lookup still in flight.
    pub fn submit(&mut self, query: &str) -> SearchTicket {
        if let Some(previous) = self.inflight.take() {
            debug!("Aborting superseded search");
            previous.abort();
        }

        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return SearchTicket { task: None };
        }

        let (abort_handle, registration) = AbortHandle::new_pair();
        let lookup = Arc::clone(&self.lookup);
        let query = query.to_string();
        let task = tokio::spawn(Abortable::new(
            async move { lookup.search(&query).await },
            registration,
        ));
        self.inflight = Some(abort_handle);

        SearchTicket { task: Some(task) }
    }

    /// Abort the in-flight lookup, if any, without starting a new one.
    pub fn cancel(&mut self) {
        if let Some(inflight) = self.inflight.take() {
            inflight.abort();
        }
    }

    /// Fetch full metadata for a selected id. Runs unconditionally on every
    /// selection; detail fetches do not participate in abort-on-supersede.
    pub async fn details(&self, imdb_id: &str) -> Result<MovieDetails, OmdbError> {
        self.lookup.details(imdb_id).await
    }
}

/// Handle to one submitted query; resolves to the state the UI should show.
pub struct SearchTicket {
    task: Option<JoinHandle<Result<Result<Vec<MovieSummary>, OmdbError>, Aborted>>>,
}

impl SearchTicket {
    /// True when the query was below the minimum length and no lookup ran.
    pub fn is_cleared(&self) -> bool {
        self.task.is_none()
    }

    pub async fn resolve(self) -> SearchState {
        let Some(task) = self.task else {
            return SearchState::Cleared;
        };

        match task.await {
            Ok(Ok(Ok(movies))) => SearchState::Loaded(movies),
            Ok(Ok(Err(OmdbError::NotFound))) => SearchState::NotFound,
            Ok(Ok(Err(e))) => SearchState::Failed(e.to_string()),
            Ok(Err(Aborted)) => SearchState::Superseded,
            Err(e) if e.is_cancelled() => SearchState::Superseded,
            Err(e) => SearchState::Failed(format!("search task failed: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub lookup that records calls. The first `pending` calls never
    /// resolve (simulating a slow network) so supersede can be exercised.
    struct StubLookup {
        calls: AtomicUsize,
        pending: usize,
        result: fn() -> Result<Vec<MovieSummary>, OmdbError>,
    }

    impl StubLookup {
        fn answering(result: fn() -> Result<Vec<MovieSummary>, OmdbError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                pending: 0,
                result,
            }
        }

        fn slow_then(pending: usize, result: fn() -> Result<Vec<MovieSummary>, OmdbError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                pending,
                result,
            }
        }
    }

    fn matrix_results() -> Result<Vec<MovieSummary>, OmdbError> {
        Ok(vec![MovieSummary {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            poster: None,
        }])
    }

    /// Local wrapper so the foreign `MovieLookup` trait can be implemented
    /// for a shared stub without violating the orphan rule.
    struct SharedStub(Arc<StubLookup>);

    #[async_trait]
    impl MovieLookup for SharedStub {
        async fn search(&self, _query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
            let call = self.0.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.0.pending {
                futures::future::pending::<()>().await;
            }
            (self.0.result)()
        }

        async fn details(&self, _imdb_id: &str) -> Result<MovieDetails, OmdbError> {
            Err(OmdbError::NotFound)
        }
    }

    #[tokio::test]
    async fn test_short_query_clears_without_lookup() {
        let stub = Arc::new(StubLookup::answering(matrix_results));
        let mut session = SearchSession::new(SharedStub(Arc::clone(&stub)));

        let ticket = session.submit("ma");
        assert!(ticket.is_cleared());
        assert!(matches!(ticket.resolve().await, SearchState::Cleared));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_whitespace_does_not_count_toward_minimum() {
        let stub = Arc::new(StubLookup::answering(matrix_results));
        let mut session = SearchSession::new(SharedStub(Arc::clone(&stub)));

        let ticket = session.submit("  ma  ");
        assert!(ticket.is_cleared());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_three_characters_trigger_lookup() {
        let stub = Arc::new(StubLookup::answering(matrix_results));
        let mut session = SearchSession::new(SharedStub(Arc::clone(&stub)));

        match session.submit("mat").resolve().await {
            SearchState::Loaded(movies) => {
                assert_eq!(movies.len(), 1);
                assert_eq!(movies[0].imdb_id, "tt0133093");
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_new_query_supersedes_inflight_lookup() {
        // First lookup hangs forever; the second answers.
        let stub = Arc::new(StubLookup::slow_then(1, matrix_results));
        let mut session = SearchSession::new(SharedStub(Arc::clone(&stub)));

        let first = session.submit("matrix");
        // Let the first task actually start before superseding it.
        tokio::task::yield_now().await;
        let second = session.submit("matrix re");

        assert!(first.resolve().await.is_superseded());
        match second.resolve().await {
            SearchState::Loaded(movies) => assert_eq!(movies[0].title, "The Matrix"),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_short_query_also_aborts_inflight_lookup() {
        let stub = Arc::new(StubLookup::slow_then(1, matrix_results));
        let mut session = SearchSession::new(SharedStub(Arc::clone(&stub)));

        let first = session.submit("matrix");
        tokio::task::yield_now().await;
        let cleared = session.submit("ma");

        assert!(first.resolve().await.is_superseded());
        assert!(cleared.is_cleared());
    }

    #[tokio::test]
    async fn test_cancel_aborts_inflight_lookup() {
        let stub = Arc::new(StubLookup::slow_then(1, matrix_results));
        let mut session = SearchSession::new(SharedStub(Arc::clone(&stub)));

        let ticket = session.submit("matrix");
        tokio::task::yield_now().await;
        session.cancel();

        assert!(ticket.resolve().await.is_superseded());
    }

    #[tokio::test]
    async fn test_no_matches_surface_as_not_found() {
        let stub = Arc::new(StubLookup::answering(|| Err(OmdbError::NotFound)));
        let mut session = SearchSession::new(SharedStub(Arc::clone(&stub)));

        assert!(matches!(
            session.submit("zzzzzz").resolve().await,
            SearchState::NotFound
        ));
    }

    #[tokio::test]
    async fn test_api_failure_surfaces_as_failed() {
        let stub = Arc::new(StubLookup::answering(|| {
            Err(OmdbError::Api("Invalid API key!".to_string()))
        }));
        let mut session = SearchSession::new(SharedStub(Arc::clone(&stub)));

        match session.submit("matrix").resolve().await {
            SearchState::Failed(msg) => assert!(msg.contains("Invalid API key!")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
