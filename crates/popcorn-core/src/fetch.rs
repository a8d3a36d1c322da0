//! Async fetch drivers.
//!
//! Each driver takes a ticket issued by a state machine ([`SearchState`] or
//! [`DetailState`]), performs the request, and hands the ticket back with the
//! outcome so the state machine can decide whether the outcome is still
//! current. The drivers never touch state themselves.
//!
//! [`SearchState`]: crate::search::SearchState
//! [`DetailState`]: crate::detail::DetailState

use std::time::Duration;

use popcorn_api::{MovieService, ServiceError};
use thiserror::Error;

use crate::detail::DetailTicket;
use crate::models::{MovieDetails, MovieSummary};
use crate::search::SearchTicket;

/// A failed fetch, reduced to what the UI shows.
///
/// Unlike the service error types this is `Clone`, so it can travel inside
/// UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Movie not found")]
    NotFound,

    #[error("Error while fetching movies.")]
    Transport(String),
}

impl FetchError {
    pub fn from_service<E>(err: &E) -> Self
    where
        E: std::error::Error + ServiceError,
    {
        if err.is_not_found() {
            Self::NotFound
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Message for the detail pane, which has its own wording.
    pub fn detail_message(&self) -> &'static str {
        match self {
            Self::NotFound => "This movie is no longer available.",
            Self::Transport(_) => "Could not load movie details.",
        }
    }
}

/// Result of a search fetch, tagged with the ticket that started it.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub ticket: SearchTicket,
    pub result: Result<Vec<MovieSummary>, FetchError>,
}

/// Result of a detail fetch, tagged with the ticket that started it.
#[derive(Debug, Clone)]
pub struct DetailOutcome {
    pub ticket: DetailTicket,
    pub result: Result<MovieDetails, FetchError>,
}

/// Wait out the debounce window, then search.
///
/// The caller aborts this future when the query changes; aborting during
/// the debounce sleep means the request is never sent.
pub async fn run_search<S: MovieService>(
    service: &S,
    ticket: SearchTicket,
    debounce: Duration,
) -> SearchOutcome {
    if !debounce.is_zero() {
        tokio::time::sleep(debounce).await;
    }

    let result = service
        .search_movies(ticket.query())
        .await
        .map_err(|e| {
            tracing::debug!(query = ticket.query(), error = %e, "search failed");
            FetchError::from_service(&e)
        });

    SearchOutcome { ticket, result }
}

pub async fn run_detail<S: MovieService>(service: &S, ticket: DetailTicket) -> DetailOutcome {
    let result = service.get_movie(ticket.imdb_id()).await.map_err(|e| {
        tracing::warn!(imdb_id = ticket.imdb_id(), error = %e, "detail fetch failed");
        FetchError::from_service(&e)
    });

    DetailOutcome { ticket, result }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use popcorn_api::OmdbError;

    use super::*;
    use crate::detail::DetailState;
    use crate::search::SearchState;
    use crate::test_support::FakeService;

    #[test]
    fn test_omdb_errors_map_to_fetch_errors() {
        let not_found = OmdbError::NotFound("Movie not found!".into());
        assert_eq!(FetchError::from_service(&not_found), FetchError::NotFound);

        let api = OmdbError::Api {
            status: 401,
            message: "Invalid API key!".into(),
        };
        match FetchError::from_service(&api) {
            FetchError::Transport(msg) => assert!(msg.contains("Invalid API key!")),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_success() {
        let service = FakeService::new().with_results("interstellar", &["tt0816692", "tt5083736"]);
        let mut state = SearchState::new(3);

        let ticket = state.set_query("interstellar").unwrap();
        assert!(state.is_loading());

        let outcome = run_search(&service, ticket, Duration::from_millis(300)).await;
        assert!(state.settle(outcome));

        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        let ids: Vec<&str> = state.results().iter().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, ["tt0816692", "tt5083736"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_not_found() {
        let service = FakeService::new();
        let mut state = SearchState::new(3);

        let ticket = state.set_query("qwertyuiop").unwrap();
        let outcome = run_search(&service, ticket, Duration::ZERO).await;
        state.settle(outcome);

        assert_eq!(state.error(), Some(&FetchError::NotFound));
        assert_eq!(state.error().unwrap().to_string(), "Movie not found");
        assert!(state.results().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_transport_error() {
        let service = FakeService::new().failing();
        let mut state = SearchState::new(3);

        let ticket = state.set_query("alien").unwrap();
        let outcome = run_search(&service, ticket, Duration::ZERO).await;
        state.settle(outcome);

        let err = state.error().unwrap();
        assert!(matches!(err, FetchError::Transport(_)));
        assert_eq!(err.to_string(), "Error while fetching movies.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_query_never_calls_service() {
        let service = FakeService::new().with_results("in", &["tt1"]);
        let mut state = SearchState::new(3);

        for q in ["", "i", "in"] {
            assert!(state.set_query(q).is_none());
        }
        assert!(state.results().is_empty());
        assert_eq!(state.error(), None);
        assert_eq!(service.search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborted_debounce_sends_nothing() {
        let service = FakeService::new().with_results("alien", &["tt0078748"]);
        let mut state = SearchState::new(3);
        let ticket = state.set_query("alien").unwrap();

        let handle = {
            let service = service.clone();
            tokio::spawn(async move {
                run_search(&service, ticket, Duration::from_millis(300)).await
            })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());

        assert_eq!(service.search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_query_wins_when_stale_response_arrives_late() {
        // "star" answers slowly, "star wars" answers fast.
        let service = FakeService::new()
            .with_results("star", &["tt_star"])
            .with_results("star wars", &["tt0076759"])
            .with_delay("star", Duration::from_secs(2))
            .with_delay("star wars", Duration::from_millis(50));
        let mut state = SearchState::new(3);

        let stale = state.set_query("star").unwrap();
        let fresh = state.set_query("star wars").unwrap();

        let slow = {
            let service = service.clone();
            tokio::spawn(async move { run_search(&service, stale, Duration::ZERO).await })
        };
        let fast = {
            let service = service.clone();
            tokio::spawn(async move { run_search(&service, fresh, Duration::ZERO).await })
        };

        // Settle in arrival order: the newer query lands first.
        assert!(state.settle(fast.await.unwrap()));
        assert!(!state.settle(slow.await.unwrap()));

        assert_eq!(state.query(), "star wars");
        assert_eq!(state.results().len(), 1);
        assert_eq!(state.results()[0].imdb_id, "tt0076759");
        assert!(!state.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_detail_is_discarded() {
        let service = FakeService::new()
            .with_details("tt_old", "100 min", "7.0")
            .with_details("tt_new", "120 min", "8.0")
            .with_delay("tt_old", Duration::from_secs(1));
        let mut state = DetailState::default();

        let old = state.request("tt_old");
        let new = state.request("tt_new");

        let new_outcome = run_detail(&service, new).await;
        let old_outcome = run_detail(&service, old).await;

        assert!(state.settle(new_outcome));
        assert!(!state.settle(old_outcome));
        assert_eq!(state.movie().unwrap().imdb_id, "tt_new");
    }

    #[tokio::test]
    async fn test_detail_failure_is_reported() {
        let service = FakeService::new().failing();
        let mut state = DetailState::default();

        let ticket = state.request("tt1");
        state.settle(run_detail(&service, ticket).await);

        assert!(state.movie().is_none());
        assert!(!state.is_loading());
        assert_eq!(
            state.error().map(FetchError::detail_message),
            Some("Could not load movie details.")
        );
    }
}
