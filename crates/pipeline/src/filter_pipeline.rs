//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{GenreFilter, MinimumRatingFilter};
use crate::traits::Filter;
use crate::types::{RecommendationRequest, RecommendedMovie};
use anyhow::Result;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter)
///     .add_filter(MinimumRatingFilter);
///
/// let filtered = pipeline.apply(results, &request)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The genre filter followed by the minimum-rating filter
    pub fn standard() -> Self {
        Self::new()
            .add_filter(GenreFilter)
            .add_filter(MinimumRatingFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence.
    ///
    /// Order of the surviving recommendations is preserved.
    pub fn apply(
        &self,
        results: Vec<RecommendedMovie>,
        request: &RecommendationRequest,
    ) -> Result<Vec<RecommendedMovie>> {
        let mut current = results;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, request)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
