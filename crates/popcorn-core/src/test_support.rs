//! Shared fixtures for unit tests: sample records and an in-memory
//! [`MovieService`] with per-key latency.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use popcorn_api::{MovieService, ServiceError};

use crate::models::{MovieDetails, MovieSummary};

pub fn summary(id: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: id.into(),
        title: format!("Movie {id}"),
        year: "2014".into(),
        poster_url: None,
        kind: Some("movie".into()),
    }
}

pub fn details(id: &str, runtime: &str, rating: &str) -> MovieDetails {
    MovieDetails {
        imdb_id: id.into(),
        title: format!("Movie {id}"),
        year: "2014".into(),
        poster_url: None,
        runtime: runtime.into(),
        imdb_rating: rating.into(),
        plot: String::new(),
        released: "07 Nov 2014".into(),
        actors: String::new(),
        director: String::new(),
        genre: String::new(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FakeError {
    #[error("nothing matched")]
    NotFound,
    #[error("connection refused")]
    Down,
}

impl ServiceError for FakeError {
    fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// In-memory movie service. Unknown keys answer not-found.
#[derive(Debug, Clone, Default)]
pub struct FakeService {
    results: HashMap<String, Vec<MovieSummary>>,
    details: HashMap<String, MovieDetails>,
    delays: HashMap<String, Duration>,
    down: bool,
    pub search_calls: Arc<AtomicUsize>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, query: &str, ids: &[&str]) -> Self {
        self.results
            .insert(query.into(), ids.iter().map(|id| summary(id)).collect());
        self
    }

    pub fn with_details(mut self, id: &str, runtime: &str, rating: &str) -> Self {
        self.details.insert(id.into(), details(id, runtime, rating));
        self
    }

    /// Delay answers for a query or id.
    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.into(), delay);
        self
    }

    /// Fail every request with a transport error.
    pub fn failing(mut self) -> Self {
        self.down = true;
        self
    }

    async fn latency(&self, key: &str) {
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

impl MovieService for FakeService {
    type Error = FakeError;

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, FakeError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.latency(query).await;
        if self.down {
            return Err(FakeError::Down);
        }
        self.results.get(query).cloned().ok_or(FakeError::NotFound)
    }

    async fn get_movie(&self, imdb_id: &str) -> Result<MovieDetails, FakeError> {
        self.latency(imdb_id).await;
        if self.down {
            return Err(FakeError::Down);
        }
        self.details.get(imdb_id).cloned().ok_or(FakeError::NotFound)
    }
}
