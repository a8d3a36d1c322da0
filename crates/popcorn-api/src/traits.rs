//! Trait definitions for movie database services.
//!
//! The OMDb client implements these traits, which lets the state machines in
//! `popcorn-core` drive fetches without knowing which backend answers them
//! (tests plug in in-memory fakes).

use std::future::Future;

/// A read-only movie database.
pub trait MovieService: Send + Sync {
    type Error: std::error::Error + ServiceError + Send + Sync + 'static;

    /// Search for movies by title.
    fn search_movies(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, Self::Error>> + Send;

    /// Fetch full details for one movie by its IMDb identifier.
    fn get_movie(
        &self,
        imdb_id: &str,
    ) -> impl Future<Output = Result<MovieDetails, Self::Error>> + Send;
}

/// Classification shared by every service error type.
pub trait ServiceError {
    /// True when the service answered but reported that nothing matched.
    fn is_not_found(&self) -> bool;
}

/// One row of a search result list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    /// `movie`, `series`, `episode` or `game`.
    pub kind: Option<String>,
}

/// Full details for a single movie.
///
/// Runtime and rating keep the service's textual form (`"169 min"`, `"8.7"`,
/// or `"N/A"`); callers parse them when they need numbers.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieDetails {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    pub runtime: String,
    pub imdb_rating: String,
    pub plot: String,
    pub released: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}
