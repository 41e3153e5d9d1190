//! Filter to enforce the user's minimum rating.

use crate::traits::Filter;
use crate::types::{RecommendationRequest, RecommendedMovie};
use anyhow::Result;

/// Removes recommendations rated below `request.min_rating`.
///
/// ## Algorithm
/// For each recommendation:
/// 1. Rated: keep if rating >= min_rating (inclusive)
/// 2. Unrated (N/A or failed fetch): keep only if min_rating is 0
pub struct MinimumRatingFilter;

impl MinimumRatingFilter {
    fn passes(rating: Option<f32>, min_rating: f32) -> bool {
        match rating {
            Some(rating) => rating >= min_rating,
            None => min_rating <= 0.0,
        }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(
        &self,
        results: Vec<RecommendedMovie>,
        request: &RecommendationRequest,
    ) -> Result<Vec<RecommendedMovie>> {
        let filtered: Vec<RecommendedMovie> = results
            .into_iter()
            .filter(|result| Self::passes(result.detail.rating, request.min_rating))
            .collect();

        Ok(filtered)
    }
}
