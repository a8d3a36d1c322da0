use reqwest::{Client, RequestBuilder};
use url::Url;

use super::error::OmdbError;
use super::types;
use crate::traits::{MovieDetails, MovieService, MovieSummary};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb (Open Movie Database) client.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    api_key: String,
    base_url: Url,
    http: Client,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default OMDb URL is valid"),
            http: Client::new(),
        }
    }

    /// Client against a custom endpoint (mirrors, local fixtures).
    pub fn with_base_url(api_key: String, base_url: &str) -> Result<Self, OmdbError> {
        Ok(Self {
            api_key,
            base_url: Url::parse(base_url)?,
            http: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn search_request(&self, query: &str) -> RequestBuilder {
        self.http
            .get(self.base_url.clone())
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
    }

    fn movie_request(&self, imdb_id: &str) -> RequestBuilder {
        self.http.get(self.base_url.clone()).query(&[
            ("apikey", self.api_key.as_str()),
            ("i", imdb_id),
            ("plot", "full"),
        ])
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, OmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "OMDb API error");
            Err(OmdbError::Api {
                status,
                message: body,
            })
        }
    }

    /// Download a poster image. Poster URLs point at a CDN, not at OMDb,
    /// so no API key is attached.
    pub async fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, OmdbError> {
        let resp = self.http.get(url).send().await?;
        let resp = Self::check_response(resp).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}

impl MovieService for OmdbClient {
    type Error = OmdbError;

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        let resp = self.search_request(query).send().await?;
        let resp = Self::check_response(resp).await?;
        let body = resp.text().await?;

        let results = types::parse_search(&body)?;
        tracing::debug!(query, count = results.len(), "OMDb search");
        Ok(results)
    }

    async fn get_movie(&self, imdb_id: &str) -> Result<MovieDetails, OmdbError> {
        let resp = self.movie_request(imdb_id).send().await?;
        let resp = Self::check_response(resp).await?;
        let body = resp.text().await?;

        types::parse_movie(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(req: reqwest::Request) -> Vec<(String, String)> {
        req.url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_search_request_params() {
        let client = OmdbClient::new("k3y".into());
        let req = client.search_request("star wars").build().unwrap();

        assert_eq!(req.url().host_str(), Some("www.omdbapi.com"));
        let pairs = query_pairs(req);
        assert!(pairs.contains(&("apikey".into(), "k3y".into())));
        assert!(pairs.contains(&("s".into(), "star wars".into())));
    }

    #[test]
    fn test_movie_request_params() {
        let client = OmdbClient::new("k3y".into());
        let req = client.movie_request("tt0816692").build().unwrap();

        let pairs = query_pairs(req);
        assert!(pairs.contains(&("i".into(), "tt0816692".into())));
        assert!(pairs.contains(&("plot".into(), "full".into())));
    }

    #[test]
    fn test_custom_base_url() {
        let client =
            OmdbClient::with_base_url("k".into(), "http://localhost:8080/omdb/").unwrap();
        let req = client.search_request("alien").build().unwrap();
        assert_eq!(req.url().host_str(), Some("localhost"));
        assert_eq!(req.url().path(), "/omdb/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = OmdbClient::with_base_url("k".into(), "not a url").unwrap_err();
        assert!(matches!(err, OmdbError::Url(_)));
    }
}
