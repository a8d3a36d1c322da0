pub use popcorn_api::{MovieDetails, MovieSummary};

use crate::error::PopcornError;

/// Parse an OMDb runtime such as `"169 min"` into minutes.
pub fn parse_runtime_minutes(runtime: &str) -> Result<u32, PopcornError> {
    let digits = runtime.trim().split_whitespace().next().unwrap_or_default();
    digits
        .parse::<u32>()
        .map_err(|_| PopcornError::Parse(format!("runtime {runtime:?}")))
}

/// Parse an OMDb aggregate rating such as `"8.7"`.
pub fn parse_rating(rating: &str) -> Result<f32, PopcornError> {
    rating
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| PopcornError::Parse(format!("rating {rating:?}")))
}
