//! HTTP client for TMDB movie details.

use crate::config::TmdbConfig;
use crate::detail::{MovieDetail, TmdbMovie};
use crate::error::{MetadataError, Result};
use async_trait::async_trait;
use data_loader::MovieId;
use reqwest::Client as HttpClient;
use tracing::{debug, instrument, warn};

/// Source of per-movie details.
///
/// Implementations never fail: anything that goes wrong yields
/// `MovieDetail::absent(title)` so one bad fetch cannot sink the rest of a
/// recommendation.
#[async_trait]
pub trait DetailsFetcher: Send + Sync {
    async fn fetch_details(&self, movie_id: MovieId, title: &str) -> MovieDetail;
}

/// Fetches details from the TMDB v3 API, one request per call.
///
/// No caching and no retries: fetching the same id twice makes two round
/// trips.
#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Build a client; fails only if the HTTP client cannot be constructed
    pub fn new(config: TmdbConfig) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(MetadataError::ClientBuild)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// Fetch details, reporting why a fetch failed.
    ///
    /// Any non-success status is an error; the body is only parsed on
    /// success.
    #[instrument(skip(self, title))]
    pub async fn try_fetch_details(&self, movie_id: MovieId, title: &str) -> Result<MovieDetail> {
        let url = self.config.movie_url(movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .send()
            .await
            .map_err(|source| MetadataError::Request { movie_id, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Status {
                movie_id,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| MetadataError::Request { movie_id, source })?;
        let movie: TmdbMovie = serde_json::from_slice(&body)
            .map_err(|source| MetadataError::Decode { movie_id, source })?;

        debug!("Fetched details for movie {}", movie_id);
        Ok(MovieDetail::from_tmdb(title, movie, &self.config))
    }
}

#[async_trait]
impl DetailsFetcher for TmdbClient {
    async fn fetch_details(&self, movie_id: MovieId, title: &str) -> MovieDetail {
        match self.try_fetch_details(movie_id, title).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!(movie_id, error = %e, "Metadata fetch failed, using absent detail");
                MovieDetail::absent(title)
            }
        }
    }
}
