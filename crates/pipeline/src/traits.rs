//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to fetched recommendations.

use crate::types::{RecommendationRequest, RecommendedMovie};
use anyhow::Result;

/// Core trait for filtering recommendations.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across tasks
/// - Filters take ownership of the Vec and return the kept items, in order
/// - Applying a filter twice must give the same result as applying it once
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of recommendations.
    ///
    /// # Arguments
    /// * `results` - The recommendations to filter (takes ownership)
    /// * `request` - The user's request, carrying the filter settings
    fn apply(
        &self,
        results: Vec<RecommendedMovie>,
        request: &RecommendationRequest,
    ) -> Result<Vec<RecommendedMovie>>;
}
