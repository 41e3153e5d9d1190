//! Filter to keep only movies in the genres the user asked for.

use crate::traits::Filter;
use crate::types::{RecommendationRequest, RecommendedMovie};
use anyhow::Result;

/// Keeps recommendations matching at least one requested genre.
///
/// ## Algorithm
/// 1. No requested genres: keep everything
/// 2. Otherwise join the fetched genres with ", "
/// 3. Keep the movie if any requested genre is a substring of that string
///
/// Movies whose details could not be fetched have no genres and are
/// dropped whenever a genre filter is active.
pub struct GenreFilter;

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(
        &self,
        results: Vec<RecommendedMovie>,
        request: &RecommendationRequest,
    ) -> Result<Vec<RecommendedMovie>> {
        if request.genre_filter.is_empty() {
            return Ok(results);
        }

        let filtered: Vec<RecommendedMovie> = results
            .into_iter()
            .filter(|result| {
                let genres = result.detail.genres_display();
                request.genre_filter.iter().any(|genre| genre.matches(&genres))
            })
            .collect();
        Ok(filtered)
    }
}
