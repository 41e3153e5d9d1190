use data_loader::MovieId;
use thiserror::Error;

/// Errors that can occur when fetching movie details
///
/// None of these abort a recommendation: `DetailsFetcher` turns every one
/// of them into an absent detail.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request for movie {movie_id} failed: {source}")]
    Request {
        movie_id: MovieId,
        #[source]
        source: reqwest::Error,
    },

    #[error("TMDB returned status {status} for movie {movie_id}")]
    Status { movie_id: MovieId, status: u16 },

    #[error("Invalid response for movie {movie_id}: {source}")]
    Decode {
        movie_id: MovieId,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MetadataError>;
