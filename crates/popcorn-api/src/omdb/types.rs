use serde::Deserialize;

use super::error::OmdbError;
use crate::traits::{MovieDetails, MovieSummary};

/// OMDb's placeholder for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

// ── Response envelope ────────────────────────────────────────────

/// Fields present on every OMDb response.
///
/// `Response` is the string `"True"` or `"False"`; on `"False"` the `Error`
/// field says why (e.g. `"Movie not found!"`, `"Incorrect IMDb ID."`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbStatus {
    pub response: String,
    pub error: Option<String>,
}

impl OmdbStatus {
    /// Turn the `"Response": "False"` sentinel into an error.
    pub fn into_result(self) -> Result<(), OmdbError> {
        if self.response.eq_ignore_ascii_case("true") {
            Ok(())
        } else {
            Err(OmdbError::NotFound(
                self.error.unwrap_or_else(|| "no results".into()),
            ))
        }
    }
}

// ── Search (`?s=`) ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbSearchResponse {
    #[serde(default)]
    pub search: Vec<OmdbSearchItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbSearchItem {
    pub title: String,
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub poster: Option<String>,
}

// ── Title lookup (`?i=`) ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbMovie {
    pub title: String,
    pub year: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

// ── Conversions ──────────────────────────────────────────────────

/// Map the `"N/A"` poster placeholder (and empty strings) to `None`.
fn poster_url(poster: Option<String>) -> Option<String> {
    poster.filter(|p| !p.is_empty() && p != NOT_AVAILABLE)
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.into())
}

impl OmdbSearchItem {
    pub fn into_summary(self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster_url: poster_url(self.poster),
            kind: self.kind,
        }
    }
}

impl OmdbMovie {
    pub fn into_details(self) -> MovieDetails {
        MovieDetails {
            imdb_id: self.imdb_id,
            title: self.title,
            year: or_na(self.year),
            poster_url: poster_url(self.poster),
            runtime: or_na(self.runtime),
            imdb_rating: or_na(self.imdb_rating),
            plot: or_na(self.plot),
            released: or_na(self.released),
            actors: or_na(self.actors),
            director: or_na(self.director),
            genre: or_na(self.genre),
        }
    }
}

/// Decode a search payload, honoring the not-found sentinel.
pub fn parse_search(body: &str) -> Result<Vec<MovieSummary>, OmdbError> {
    let status: OmdbStatus =
        serde_json::from_str(body).map_err(|e| OmdbError::Parse(e.to_string()))?;
    status.into_result()?;

    let resp: OmdbSearchResponse =
        serde_json::from_str(body).map_err(|e| OmdbError::Parse(e.to_string()))?;
    Ok(resp.search.into_iter().map(|i| i.into_summary()).collect())
}

/// Decode a title-lookup payload, honoring the not-found sentinel.
pub fn parse_movie(body: &str) -> Result<MovieDetails, OmdbError> {
    let status: OmdbStatus =
        serde_json::from_str(body).map_err(|e| OmdbError::Parse(e.to_string()))?;
    status.into_result()?;

    let movie: OmdbMovie =
        serde_json::from_str(body).map_err(|e| OmdbError::Parse(e.to_string()))?;
    Ok(movie.into_details())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search() {
        let json = r#"{
            "Search": [
                {
                    "Title": "Interstellar",
                    "Year": "2014",
                    "imdbID": "tt0816692",
                    "Type": "movie",
                    "Poster": "https://m.media-amazon.com/images/M/interstellar.jpg"
                },
                {
                    "Title": "Interstellar Wars",
                    "Year": "2016",
                    "imdbID": "tt5083736",
                    "Type": "movie",
                    "Poster": "N/A"
                }
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let results = parse_search(json).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].imdb_id, "tt0816692");
        assert_eq!(results[0].title, "Interstellar");
        assert_eq!(results[0].year, "2014");
        assert_eq!(results[0].kind.as_deref(), Some("movie"));
        assert!(results[0].poster_url.is_some());
        // "N/A" poster becomes None
        assert_eq!(results[1].poster_url, None);
    }

    #[test]
    fn test_search_not_found_sentinel() {
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let err = parse_search(json).unwrap_err();
        match err {
            OmdbError::NotFound(msg) => assert_eq!(msg, "Movie not found!"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_search_malformed_body() {
        let err = parse_search("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, OmdbError::Parse(_)));
    }

    #[test]
    fn test_deserialize_movie() {
        let json = r#"{
            "Title": "Interstellar",
            "Year": "2014",
            "Rated": "PG-13",
            "Released": "07 Nov 2014",
            "Runtime": "169 min",
            "Genre": "Adventure, Drama, Sci-Fi",
            "Director": "Christopher Nolan",
            "Writer": "Jonathan Nolan, Christopher Nolan",
            "Actors": "Matthew McConaughey, Anne Hathaway, Jessica Chastain",
            "Plot": "A team of explorers travel through a wormhole in space.",
            "Language": "English",
            "Country": "United States, United Kingdom, Canada",
            "Poster": "https://m.media-amazon.com/images/M/interstellar.jpg",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "8.7/10"}],
            "Metascore": "74",
            "imdbRating": "8.7",
            "imdbVotes": "2,100,000",
            "imdbID": "tt0816692",
            "Type": "movie",
            "Response": "True"
        }"#;

        let movie = parse_movie(json).unwrap();
        assert_eq!(movie.imdb_id, "tt0816692");
        assert_eq!(movie.title, "Interstellar");
        assert_eq!(movie.runtime, "169 min");
        assert_eq!(movie.imdb_rating, "8.7");
        assert_eq!(movie.director, "Christopher Nolan");
        assert_eq!(movie.released, "07 Nov 2014");
        assert!(movie.genre.contains("Sci-Fi"));
    }

    #[test]
    fn test_movie_missing_fields_default_to_na() {
        let json = r#"{
            "Title": "Obscure Short",
            "imdbID": "tt0000001",
            "Poster": "N/A",
            "Response": "True"
        }"#;

        let movie = parse_movie(json).unwrap();
        assert_eq!(movie.runtime, NOT_AVAILABLE);
        assert_eq!(movie.imdb_rating, NOT_AVAILABLE);
        assert_eq!(movie.poster_url, None);
    }

    #[test]
    fn test_movie_incorrect_id() {
        let json = r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#;
        assert!(matches!(parse_movie(json), Err(OmdbError::NotFound(_))));
    }
}
