//! Server crate for the movie recommender.
//!
//! This crate contains the service that coordinates the catalog lookup,
//! the metadata fetches and the filter pipeline for one request.

pub mod orchestrator;

pub use orchestrator::RecommendationService;
