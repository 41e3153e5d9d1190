//! Settings for the TMDB client.

use data_loader::MovieId;
use std::time::Duration;

/// Base URL of the TMDB v3 REST API
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";
/// Prefix that turns a TMDB poster path into an image URL
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://image.tmdb.org/t/p/w500/";
/// Prefix that turns an IMDb id into a title page URL
pub const DEFAULT_IMDB_BASE_URL: &str = "https://www.imdb.com/title/";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Configuration for `TmdbClient`
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub api_url: String,
    pub language: String,
    pub image_base_url: String,
    pub imdb_base_url: String,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            imdb_base_url: DEFAULT_IMDB_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Point the client at another API root (default: TMDB v3)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Bound each request (default: no override)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `{api_url}/movie/{id}`, tolerating a trailing slash on the root
    pub fn movie_url(&self, movie_id: MovieId) -> String {
        format!("{}/movie/{}", self.api_url.trim_end_matches('/'), movie_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TmdbConfig::new("key");
        assert_eq!(config.language, "en-US");
        assert!(config.timeout.is_none());
        assert_eq!(
            config.movie_url(550),
            "https://api.themoviedb.org/3/movie/550"
        );
    }

    #[test]
    fn test_movie_url_trailing_slash() {
        let config = TmdbConfig::new("key").with_api_url("http://127.0.0.1:8080/");
        assert_eq!(config.movie_url(7), "http://127.0.0.1:8080/movie/7");
    }
}
