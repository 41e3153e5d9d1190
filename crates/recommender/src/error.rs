use thiserror::Error;

/// Errors returned by the recommender
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// No catalog title matches, even ignoring case
    #[error("Unknown movie: {title}")]
    UnknownMovie { title: String },
}

pub type Result<T> = std::result::Result<T, RecommendError>;
