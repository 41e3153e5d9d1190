//! Pipeline for sorting and filtering fetched recommendations.
//!
//! This crate provides:
//! - The request/result types shared by the presentation layer
//! - Filter trait and implementations (genre, minimum rating)
//! - FilterPipeline for composing filters
//! - `sort_results` for the similarity / rating orderings
//!
//! ## Architecture
//! Results arrive from the recommender with their details fetched, then:
//! 1. `sort_results` orders them per the request's sort mode
//! 2. Filters drop results outside the requested genres or rating
//!
//! Filters keep order, so sorting first and filtering second gives the
//! same list as the other way round.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{sort_results, FilterPipeline, RecommendationRequest, SortMode};
//!
//! let request = RecommendationRequest::new("Avatar")
//!     .with_sort_mode(SortMode::Rating)
//!     .with_min_rating(6.0);
//!
//! sort_results(&mut results, request.sort_mode);
//! let filtered = FilterPipeline::standard().apply(results, &request)?;
//! ```

pub mod traits;
pub mod types;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use sort::sort_results;
pub use types::{
    parse_min_rating, Genre, ParseRequestError, RecommendationRequest, RecommendedMovie, SortMode,
};
