//! Movie metadata client for The Movie Database (TMDB).
//!
//! This crate fetches per-movie details for recommended titles. It handles:
//! - Building the `GET /movie/{id}` request with API key and language
//! - Mapping the JSON payload into a fixed-shape `MovieDetail`
//! - Turning every failure (status, transport, timeout, bad JSON) into an
//!   absent detail so callers can carry on
//!
//! ## Example Usage
//! ```ignore
//! use metadata::{DetailsFetcher, TmdbClient, TmdbConfig};
//!
//! let client = TmdbClient::new(TmdbConfig::new(api_key))?;
//! let detail = client.fetch_details(27205, "Inception").await;
//! println!("{} - {}", detail.title, detail.rating_display());
//! ```

pub mod client;
pub mod config;
pub mod detail;
pub mod error;

pub use client::{DetailsFetcher, TmdbClient};
pub use config::TmdbConfig;
pub use detail::{MovieDetail, TmdbMovie};
pub use error::{MetadataError, Result};
