//! Error types for the data-loader crate.
//!
//! Every variant here is fatal at startup: a catalog that fails to load
//! cannot serve any recommendation.

use thiserror::Error;

/// Errors that can occur while loading and validating the catalog
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the movies file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// The similarity artifact is not valid JSON of the expected shape
    #[error("Malformed similarity matrix: {0}")]
    MalformedMatrix(#[from] serde_json::Error),

    /// A matrix row has the wrong number of columns
    #[error("Similarity matrix is not square: row {row} has {found} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Matrix and movie list disagree on cardinality
    #[error("Dimension mismatch: {movies} movies but similarity matrix is {rows}x{rows}")]
    DimensionMismatch { movies: usize, rows: usize },

    /// A score is NaN or infinite
    #[error("Invalid similarity score at ({row}, {col}): {value}")]
    InvalidScore { row: usize, col: usize, value: f32 },

    /// Catalog has no movies at all
    #[error("Catalog is empty")]
    EmptyCatalog,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
