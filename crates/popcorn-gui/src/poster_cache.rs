use std::collections::HashMap;

use iced::widget::image;

/// State of a poster image for a given movie.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// In-memory cache mapping IMDb ids to their poster state.
///
/// Nothing is written to disk; posters live for the session.
#[derive(Debug, Default)]
pub struct PosterCache {
    states: HashMap<String, PosterState>,
}

impl PosterCache {
    pub fn get(&self, imdb_id: &str) -> Option<&PosterState> {
        self.states.get(imdb_id)
    }

    /// Mark a poster as in flight. Returns `false` if it was already
    /// requested, in which case nothing should be fetched.
    ///
    /// Ids without a poster URL are marked failed straight away.
    pub fn begin(&mut self, imdb_id: &str, has_url: bool) -> bool {
        if self.states.contains_key(imdb_id) {
            return false;
        }
        let state = if has_url {
            PosterState::Loading
        } else {
            PosterState::Failed
        };
        self.states.insert(imdb_id.to_string(), state);
        has_url
    }

    pub fn finish(&mut self, imdb_id: String, result: Result<Vec<u8>, String>) {
        let state = match result {
            Ok(bytes) => PosterState::Loaded(image::Handle::from_bytes(bytes)),
            Err(e) => {
                tracing::debug!(imdb_id = %imdb_id, error = %e, "poster download failed");
                PosterState::Failed
            }
        };
        self.states.insert(imdb_id, state);
    }
}
