//! # Recommender Crate
//!
//! Nearest-neighbour lookup over the catalog's precomputed similarity
//! matrix: "movies similar to the one you picked".
//!
//! ## Algorithm
//! 1. Resolve the title to a catalog position (case-insensitive)
//! 2. Enumerate that movie's similarity row
//! 3. Drop the movie itself by position, never by rank
//! 4. Sort by score descending, ties by ascending catalog position
//! 5. Keep the top `limit` entries
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::Recommender;
//! use data_loader::Catalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_files("data/sample".as_ref())?);
//! let recommender = Recommender::new(catalog);
//!
//! for rec in recommender.recommend("Avatar")? {
//!     println!("{} ({:.2})", rec.movie.title, rec.score);
//! }
//! ```

pub mod error;
pub mod similar;

pub use error::{RecommendError, Result};
pub use similar::{Recommendation, Recommender, DEFAULT_RECOMMENDATIONS};
