//! Similar-movie lookup over a loaded `Catalog`.

use crate::error::{RecommendError, Result};
use data_loader::{Catalog, MovieRecord};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

/// How many similar movies a recommendation returns by default
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// One similar movie and its score against the query movie
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Catalog position of the recommended movie
    pub index: usize,
    pub movie: MovieRecord,
    /// Similarity between the query movie and this one
    pub score: f32,
}

/// Recommends movies by reading rows of the similarity matrix
#[derive(Clone)]
pub struct Recommender {
    /// Shared read-only catalog
    catalog: Arc<Catalog>,

    /// Maximum number of results per query
    limit: usize,
}

impl Recommender {
    /// Create a recommender returning `DEFAULT_RECOMMENDATIONS` results
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            limit: DEFAULT_RECOMMENDATIONS,
        }
    }

    /// Configure how many results each query returns (default: 5)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Most similar movies to `title`, best first.
    ///
    /// Returns `min(limit, catalog.len() - 1)` results, never including the
    /// query movie itself.
    #[instrument(skip(self))]
    pub fn recommend(&self, title: &str) -> Result<Vec<Recommendation>> {
        let index = self
            .catalog
            .find_index_by_title(title)
            .ok_or_else(|| RecommendError::UnknownMovie {
                title: title.to_string(),
            })?;

        let recommendations = self.recommend_for_index(index, self.limit);
        debug!(
            "Recommended {} movies for '{}' (catalog position {})",
            recommendations.len(),
            title,
            index
        );
        Ok(recommendations)
    }

    /// Most similar movies to the catalog entry at `index`.
    ///
    /// An out-of-range index yields no recommendations.
    pub fn recommend_for_index(&self, index: usize, limit: usize) -> Vec<Recommendation> {
        let Some(row) = self.catalog.similarity_row(index) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, f32)> = row
            .par_iter()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .map(|(other, &score)| (other, score))
            .collect();

        // Comparator is total, so the unstable sort is deterministic
        scored.par_sort_unstable_by(|a, b| rank_order(*a, *b));
        scored.truncate(limit);

        scored
            .into_iter()
            .filter_map(|(other, score)| {
                let movie = self.catalog.movie(other)?;
                Some(Recommendation {
                    index: other,
                    movie: movie.clone(),
                    score,
                })
            })
            .collect()
    }
}

/// Score descending, then catalog position ascending
fn rank_order(a: (usize, f32), b: (usize, f32)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}
