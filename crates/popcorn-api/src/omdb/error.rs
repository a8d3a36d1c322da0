use thiserror::Error;

use crate::traits::ServiceError;

/// Errors from the OMDb API client.
#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid base URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ServiceError for OmdbError {
    fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
