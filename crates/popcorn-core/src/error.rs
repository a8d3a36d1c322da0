use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopcornError {
    #[error("config error: {0}")]
    Config(String),

    #[error("parse failed: {0}")]
    Parse(String),

    #[error("rating {rating} is outside 1..={max}")]
    InvalidRating { rating: u8, max: u8 },

    #[error("already in the watched list: {0}")]
    AlreadyWatched(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
