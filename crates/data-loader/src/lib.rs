//! # Data Loader Crate
//!
//! This crate loads the movie catalog: the list of movie records and the
//! precomputed similarity matrix that goes with it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, SimilarityMatrix, Catalog)
//! - **parser**: Parse `movies.dat` and `similarity.json`
//! - **index**: Validate the artifacts and assemble the Catalog
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(Path::new("data/sample"))?;
//!
//! let index = catalog.find_index_by_title("avatar").unwrap();
//! let row = catalog.similarity_row(index).unwrap();
//! println!("{} has {} scores", catalog.movie(index).unwrap().title, row.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::{MOVIES_FILE, SIMILARITY_FILE};
pub use types::{Catalog, MovieId, MovieRecord, SimilarityMatrix};
