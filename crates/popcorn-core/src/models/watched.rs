use serde::{Deserialize, Serialize};

use super::movie::{parse_rating, parse_runtime_minutes, MovieDetails};
use crate::error::PopcornError;

/// A movie the user rated and confirmed as watched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    /// Aggregate score from the movie database.
    pub imdb_rating: f32,
    pub runtime_minutes: u32,
    /// The user's own score, `1..=max_rating`.
    pub user_rating: u8,
}

impl WatchedEntry {
    /// Build an entry from the displayed details and the chosen rating.
    pub fn from_details(
        details: &MovieDetails,
        user_rating: u8,
        max_rating: u8,
    ) -> Result<Self, PopcornError> {
        if user_rating == 0 || user_rating > max_rating {
            return Err(PopcornError::InvalidRating {
                rating: user_rating,
                max: max_rating,
            });
        }

        Ok(Self {
            imdb_id: details.imdb_id.clone(),
            title: details.title.clone(),
            year: details.year.clone(),
            poster_url: details.poster_url.clone(),
            imdb_rating: parse_rating(&details.imdb_rating)?,
            runtime_minutes: parse_runtime_minutes(&details.runtime)?,
            user_rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::details;

    #[test]
    fn test_from_details() {
        let entry = WatchedEntry::from_details(&details("tt1", "169 min", "8.7"), 9, 10).unwrap();
        assert_eq!(entry.imdb_id, "tt1");
        assert_eq!(entry.runtime_minutes, 169);
        assert!((entry.imdb_rating - 8.7).abs() < f32::EPSILON);
        assert_eq!(entry.user_rating, 9);
    }

    #[test]
    fn test_rating_bounds() {
        let d = details("tt1", "100 min", "7.0");
        assert!(WatchedEntry::from_details(&d, 1, 10).is_ok());
        assert!(WatchedEntry::from_details(&d, 10, 10).is_ok());
        assert!(matches!(
            WatchedEntry::from_details(&d, 0, 10),
            Err(PopcornError::InvalidRating { rating: 0, max: 10 })
        ));
        assert!(matches!(
            WatchedEntry::from_details(&d, 11, 10),
            Err(PopcornError::InvalidRating { .. })
        ));
    }

    #[test]
    fn test_unparseable_runtime() {
        let d = details("tt1", "N/A", "7.0");
        assert!(matches!(
            WatchedEntry::from_details(&d, 5, 10),
            Err(PopcornError::Parse(_))
        ));
    }
}
