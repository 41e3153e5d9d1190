//! Catalog assembly and validation.
//!
//! - Parse both artifacts (in parallel with Rayon)
//! - Check that the matrix is square, finite and aligned with the movies
//! - Build the lowercase title index used for lookups

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// File holding the movie records, relative to the catalog directory
pub const MOVIES_FILE: &str = "movies.dat";
/// File holding the similarity matrix, relative to the catalog directory
pub const SIMILARITY_FILE: &str = "similarity.json";

impl Catalog {
    /// Load the catalog from a directory containing `movies.dat` and
    /// `similarity.json`.
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Validate shape and scores
    /// 3. Build the title index
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", data_dir);

        let movies_path = data_dir.join(MOVIES_FILE);
        let similarity_path = data_dir.join(SIMILARITY_FILE);

        // The matrix is N² numbers and dominates load time; parse it
        // alongside the movie list.
        let (movies, rows) = rayon::join(
            || parser::parse_movies(&movies_path),
            || parser::parse_similarity(&similarity_path),
        );
        let movies = movies?;
        let rows = rows?;

        info!(
            "Parsed {} movies and a {}-row similarity matrix",
            movies.len(),
            rows.len()
        );

        let catalog = Self::from_parts(movies, rows)?;
        info!("Catalog successfully built and validated!");
        Ok(catalog)
    }

    /// Assemble a catalog from already-parsed parts.
    ///
    /// Row `i` of `rows` must describe `movies[i]`.
    pub fn from_parts(movies: Vec<MovieRecord>, rows: Vec<Vec<f32>>) -> Result<Self> {
        validate(&movies, &rows)?;

        let title_index = build_title_index(&movies);
        Ok(Self {
            movies,
            similarity: SimilarityMatrix::from_rows(rows),
            title_index,
        })
    }
}

/// Check that:
/// - the catalog is not empty
/// - the matrix has one row per movie
/// - every row has one column per movie
/// - every score is finite
fn validate(movies: &[MovieRecord], rows: &[Vec<f32>]) -> Result<()> {
    if movies.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    if rows.len() != movies.len() {
        return Err(CatalogError::DimensionMismatch {
            movies: movies.len(),
            rows: rows.len(),
        });
    }

    let expected = rows.len();
    if let Some((row, found)) = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != expected)
        .map(|(i, r)| (i, r.len()))
    {
        return Err(CatalogError::NotSquare {
            row,
            expected,
            found,
        });
    }

    let bad_score = rows.par_iter().enumerate().find_map_first(|(row, scores)| {
        scores
            .iter()
            .position(|s| !s.is_finite())
            .map(|col| (row, col, scores[col]))
    });
    if let Some((row, col, value)) = bad_score {
        return Err(CatalogError::InvalidScore { row, col, value });
    }

    Ok(())
}

/// Map each lowercased title to the first position it appears at
fn build_title_index(movies: &[MovieRecord]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(movies.len());
    for (position, movie) in movies.iter().enumerate() {
        index.entry(movie.title.to_lowercase()).or_insert(position);
    }
    index
}
