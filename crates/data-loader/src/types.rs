//! Core domain types for the movie catalog.
//!
//! - `MovieRecord`: one row of the catalog
//! - `SimilarityMatrix`: dense N×N pairwise scores
//! - `Catalog`: both of the above plus a title lookup, read-only once built

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// TMDB identifier of a movie
pub type MovieId = u32;

// =============================================================================
// Movie Records
// =============================================================================

/// A movie known to the catalog.
///
/// Titles are not guaranteed to be unique; lookups resolve to the first
/// record in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
}

impl MovieRecord {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

// =============================================================================
// Similarity Matrix
// =============================================================================

/// Square matrix of similarity scores stored row-major.
///
/// Row `i` holds the scores of movie `i` against every movie in the
/// catalog, including itself. Symmetry is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    dimension: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Build a matrix from rows. Rows must all have `rows.len()` columns;
    /// `Catalog::from_parts` checks this before calling.
    pub(crate) fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        let dimension = rows.len();
        let scores = rows.into_iter().flatten().collect();
        Self { dimension, scores }
    }

    /// Number of rows (and columns)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Scores of movie `index` against every catalog entry
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.dimension {
            return None;
        }
        let start = index * self.dimension;
        Some(&self.scores[start..start + self.dimension])
    }

    /// Score between movies `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        self.row(i).and_then(|row| row.get(j).copied())
    }
}

// =============================================================================
// Catalog - the read-only store
// =============================================================================

/// Movie records and their similarity matrix, positionally aligned.
///
/// Built once at startup (see `Catalog::load_from_files`) and shared behind
/// an `Arc`. There are no mutators.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) movies: Vec<MovieRecord>,
    pub(crate) similarity: SimilarityMatrix,
    /// Lowercased title -> first index carrying that title
    pub(crate) title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All records in catalog order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Record at a catalog position
    pub fn movie(&self, index: usize) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Similarity row for the movie at `index`
    pub fn similarity_row(&self, index: usize) -> Option<&[f32]> {
        self.similarity.row(index)
    }

    /// Resolve a title to its catalog position.
    ///
    /// Case-insensitive exact match. Duplicated titles resolve to the first
    /// position.
    pub fn find_index_by_title(&self, title: &str) -> Option<usize> {
        self.title_index.get(&title.to_lowercase()).copied()
    }

    /// Unique titles in catalog order, for populating a title selector
    pub fn titles(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.movies
            .iter()
            .filter(|movie| seen.insert(movie.title.as_str()))
            .map(|movie| movie.title.as_str())
            .collect()
    }

    /// Case-insensitive substring search over titles.
    ///
    /// Exact matches come first, then substring matches, each group in
    /// catalog order.
    pub fn search(&self, query: &str) -> Vec<(usize, &MovieRecord)> {
        let query = query.to_lowercase();
        let mut exact = Vec::new();
        let mut partial = Vec::new();

        for (index, movie) in self.movies.iter().enumerate() {
            let title = movie.title.to_lowercase();
            if title == query {
                exact.push((index, movie));
            } else if title.contains(&query) {
                partial.push((index, movie));
            }
        }

        exact.extend(partial);
        exact
    }
}
