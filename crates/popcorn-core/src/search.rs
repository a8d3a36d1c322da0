//! Search query state with last-query-wins semantics.
//!
//! Every query edit bumps a generation counter and, when the query is long
//! enough, issues a [`SearchTicket`] for the fetch driver. An outcome is only
//! applied if its ticket carries the current generation, so a slow response
//! for an older query can never overwrite the results of a newer one.

use crate::fetch::{FetchError, SearchOutcome};
use crate::models::MovieSummary;

/// Handle for one issued search. Returned to [`SearchState::settle`] with
/// the fetch outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone)]
pub struct SearchState {
    query: String,
    results: Vec<MovieSummary>,
    error: Option<FetchError>,
    loading: bool,
    generation: u64,
    min_query_length: usize,
}

impl SearchState {
    pub fn new(min_query_length: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            error: None,
            loading: false,
            generation: 0,
            min_query_length,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the query. Any in-flight fetch becomes stale.
    ///
    /// Below the minimum length the results and error are cleared and no
    /// ticket is issued. Otherwise the state enters loading and the returned
    /// ticket must be handed to the fetch driver.
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<SearchTicket> {
        self.query = query.into();
        self.generation += 1;
        self.error = None;

        // Length in UTF-16 code units, so one emoji counts as two.
        if self.query.encode_utf16().count() < self.min_query_length {
            self.results.clear();
            self.loading = false;
            return None;
        }

        self.loading = true;
        Some(SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Re-issue a ticket for the current query, e.g. after a failure.
    pub fn retry(&mut self) -> Option<SearchTicket> {
        let query = std::mem::take(&mut self.query);
        self.set_query(query)
    }

    /// Apply a fetch outcome. Returns `false` (and changes nothing) when the
    /// outcome belongs to a superseded query.
    pub fn settle(&mut self, outcome: SearchOutcome) -> bool {
        if outcome.ticket.generation != self.generation {
            tracing::debug!(
                stale = outcome.ticket.query(),
                current = %self.query,
                "discarding stale search outcome"
            );
            return false;
        }

        self.loading = false;
        match outcome.result {
            Ok(results) => {
                self.results = results;
                self.error = None;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e);
            }
        }
        true
    }
}
