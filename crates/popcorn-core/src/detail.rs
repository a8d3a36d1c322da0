//! Detail record for the current selection.
//!
//! Detail requests are not aborted when the selection moves on, but each one
//! carries a generation ticket and only the latest is ever applied.

use crate::fetch::{DetailOutcome, FetchError};
use crate::models::MovieDetails;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
    imdb_id: String,
}

impl DetailTicket {
    pub fn imdb_id(&self) -> &str {
        &self.imdb_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    generation: u64,
    requested: Option<String>,
    movie: Option<MovieDetails>,
    loading: bool,
    error: Option<FetchError>,
}

impl DetailState {
    /// Start loading `imdb_id`. The previous record is dropped immediately.
    pub fn request(&mut self, imdb_id: &str) -> DetailTicket {
        self.generation += 1;
        self.requested = Some(imdb_id.to_string());
        self.movie = None;
        self.error = None;
        self.loading = true;
        DetailTicket {
            generation: self.generation,
            imdb_id: imdb_id.to_string(),
        }
    }

    /// Apply a fetch outcome if it belongs to the latest request.
    pub fn settle(&mut self, outcome: DetailOutcome) -> bool {
        let current = outcome.ticket.generation == self.generation
            && self.requested.as_deref() == Some(outcome.ticket.imdb_id());
        if !current {
            tracing::debug!(
                stale = outcome.ticket.imdb_id(),
                "discarding stale detail outcome"
            );
            return false;
        }

        self.loading = false;
        match outcome.result {
            Ok(movie) => self.movie = Some(movie),
            Err(e) => self.error = Some(e),
        }
        true
    }

    /// Forget the current record; any in-flight response becomes stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.requested = None;
        self.movie = None;
        self.error = None;
        self.loading = false;
    }

    pub fn movie(&self) -> Option<&MovieDetails> {
        self.movie.as_ref()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
