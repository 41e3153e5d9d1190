//! # Recommendation Service
//!
//! This module coordinates one recommendation request:
//! 1. Find the most similar movies in the catalog
//! 2. Fetch details for each of them concurrently
//! 3. Sort per the requested sort mode
//! 4. Apply the genre and minimum-rating filters
//!
//! A failed detail fetch never aborts the request; the movie stays in the
//! list with an absent detail and the filters decide its fate.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tokio::task::JoinSet;
use tracing::{info, warn};

use data_loader::Catalog;
use metadata::{DetailsFetcher, MovieDetail};
use pipeline::{sort_results, FilterPipeline, RecommendationRequest, RecommendedMovie};
use recommender::{Recommendation, Recommender};

/// Main service that turns a request into a filtered, sorted result list
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    recommender: Recommender,
    fetcher: Arc<dyn DetailsFetcher>,
    filter_pipeline: Arc<FilterPipeline>,
}

impl RecommendationService {
    /// Create a service with the standard filter pipeline
    ///
    /// # Arguments
    /// * `catalog` - Shared, already-loaded catalog
    /// * `fetcher` - Where movie details come from (TMDB in production)
    pub fn new(catalog: Arc<Catalog>, fetcher: Arc<dyn DetailsFetcher>) -> Self {
        let recommender = Recommender::new(catalog.clone());
        Self {
            catalog,
            recommender,
            fetcher,
            filter_pipeline: Arc::new(FilterPipeline::standard()),
        }
    }

    /// Replace the filter pipeline
    pub fn with_filter_pipeline(mut self, filter_pipeline: FilterPipeline) -> Self {
        self.filter_pipeline = Arc::new(filter_pipeline);
        self
    }

    /// Replace the recommender, e.g. to change how many results it returns
    pub fn with_recommender(mut self, recommender: Recommender) -> Self {
        self.recommender = recommender;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Main entry point: run one recommendation request
    ///
    /// # Returns
    /// Up to five results, sorted per `request.sort_mode` and filtered.
    /// An empty list means nothing matched the filters.
    ///
    /// # Errors
    /// `recommender::RecommendError::UnknownMovie` (downcastable from the
    /// returned `anyhow::Error`) when the title is not in the catalog.
    pub async fn recommend(&self, request: &RecommendationRequest) -> Result<Vec<RecommendedMovie>> {
        let start_time = Instant::now();

        let similar = self.recommender.recommend(&request.selected_title)?;
        info!(
            "Found {} similar movies for '{}'",
            similar.len(),
            request.selected_title
        );

        let mut results = self.fetch_details(similar).await;
        let absent = results.iter().filter(|r| r.detail.is_absent()).count();
        info!(
            "Fetched details for {} movies ({} unavailable)",
            results.len(),
            absent
        );

        sort_results(&mut results, request.sort_mode);

        let filtered = self.apply_filters(results, request)?;

        info!(
            "Total time to recommend for '{}': {:.2?} ({} results after filtering)",
            request.selected_title,
            start_time.elapsed(),
            filtered.len()
        );
        Ok(filtered)
    }

    /// Fetch details for every recommendation concurrently.
    ///
    /// Output order matches input order regardless of completion order.
    async fn fetch_details(&self, recommendations: Vec<Recommendation>) -> Vec<RecommendedMovie> {
        let mut tasks = JoinSet::new();
        for (position, rec) in recommendations.iter().enumerate() {
            let fetcher = self.fetcher.clone();
            let movie_id = rec.movie.id;
            let title = rec.movie.title.clone();
            tasks.spawn(async move { (position, fetcher.fetch_details(movie_id, &title).await) });
        }

        let mut details: Vec<Option<MovieDetail>> = vec![None; recommendations.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((position, detail)) => details[position] = Some(detail),
                Err(e) => warn!("Metadata fetch task failed: {}", e),
            }
        }

        recommendations
            .into_iter()
            .zip(details)
            .map(|(rec, detail)| {
                let detail = detail.unwrap_or_else(|| MovieDetail::absent(rec.movie.title.clone()));
                RecommendedMovie::new(rec, detail)
            })
            .collect()
    }

    /// Apply the filter pipeline to sorted results
    fn apply_filters(
        &self,
        results: Vec<RecommendedMovie>,
        request: &RecommendationRequest,
    ) -> Result<Vec<RecommendedMovie>> {
        info!("Applying filters to {} results", results.len());
        let filtered = self.filter_pipeline.apply(results, request)?;
        info!("Filtering complete, {} results remain", filtered.len());
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use data_loader::{MovieId, MovieRecord};
    use pipeline::{Genre, SortMode};
    use recommender::RecommendError;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    /// Six movies, "A" closest to B then C, D, E, F
    fn build_test_catalog() -> Arc<Catalog> {
        let movies = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .enumerate()
            .map(|(i, t)| MovieRecord::new(i as MovieId + 100, *t))
            .collect();
        let rows = vec![
            vec![1.0, 0.9, 0.8, 0.7, 0.6, 0.5],
            vec![0.9, 1.0, 0.4, 0.3, 0.2, 0.1],
            vec![0.8, 0.4, 1.0, 0.6, 0.3, 0.2],
            vec![0.7, 0.3, 0.6, 1.0, 0.5, 0.4],
            vec![0.6, 0.2, 0.3, 0.5, 1.0, 0.8],
            vec![0.5, 0.1, 0.2, 0.4, 0.8, 1.0],
        ];
        Arc::new(Catalog::from_parts(movies, rows).unwrap())
    }

    // ============================================================================
    // Mock Fetcher
    // ============================================================================

    /// Deterministic fetcher: fixed ratings and genres per id, some ids fail
    #[derive(Default)]
    struct MockFetcher {
        ratings: HashMap<MovieId, f32>,
        genres: HashMap<MovieId, Vec<String>>,
        failing: HashSet<MovieId>,
        delay: Option<Duration>,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl MockFetcher {
        fn with_rating(mut self, id: MovieId, rating: f32) -> Self {
            self.ratings.insert(id, rating);
            self
        }

        fn with_genres(mut self, id: MovieId, genres: &[&str]) -> Self {
            self.genres
                .insert(id, genres.iter().map(|g| g.to_string()).collect());
            self
        }

        fn failing(mut self, id: MovieId) -> Self {
            self.failing.insert(id);
            self
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
    }

    #[async_trait]
    impl DetailsFetcher for MockFetcher {
        async fn fetch_details(&self, movie_id: MovieId, title: &str) -> MovieDetail {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.failing.contains(&movie_id) {
                return MovieDetail::absent(title);
            }

            let mut detail = MovieDetail::absent(title);
            detail.overview = Some(format!("About {}", title));
            detail.release_date = Some("2001-01-01".to_string());
            detail.rating = self.ratings.get(&movie_id).copied();
            detail.genres = self.genres.get(&movie_id).cloned().unwrap_or_default();
            detail
        }
    }

    fn build_service(fetcher: MockFetcher) -> (RecommendationService, Arc<MockFetcher>) {
        let fetcher = Arc::new(fetcher);
        let service = RecommendationService::new(build_test_catalog(), fetcher.clone());
        (service, fetcher)
    }

    fn titles(results: &[RecommendedMovie]) -> Vec<&str> {
        results.iter().map(|r| r.movie.title.as_str()).collect()
    }

    // ============================================================================
    // Tests
    // ============================================================================

    #[tokio::test]
    async fn test_recommend_by_similarity() {
        let (service, fetcher) = build_service(MockFetcher::default());

        let results = service
            .recommend(&RecommendationRequest::new("A"))
            .await
            .expect("recommend failed");

        assert_eq!(titles(&results), vec!["B", "C", "D", "E", "F"]);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 5);
        assert!(results.iter().all(|r| r.detail.title == r.movie.title));
    }

    #[tokio::test]
    async fn test_recommend_is_case_insensitive() {
        let (service, _) = build_service(MockFetcher::default().with_rating(101, 7.0));

        let upper = service.recommend(&RecommendationRequest::new("A")).await.unwrap();
        let lower = service.recommend(&RecommendationRequest::new("a")).await.unwrap();
        assert_eq!(upper, lower);
    }

    #[tokio::test]
    async fn test_recommend_by_rating() {
        let fetcher = MockFetcher::default()
            .with_rating(101, 5.5) // B
            .with_rating(102, 9.0) // C
            .with_rating(104, 7.5) // E
            .with_rating(105, 7.5); // F
        let (service, _) = build_service(fetcher);

        let request = RecommendationRequest::new("A").with_sort_mode(SortMode::Rating);
        let results = service.recommend(&request).await.unwrap();

        // D has no rating and goes last; E and F tie and keep similarity order
        assert_eq!(titles(&results), vec!["C", "E", "F", "B", "D"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_does_not_abort() {
        let fetcher = MockFetcher::default()
            .with_rating(101, 6.0)
            .with_rating(103, 6.0)
            .failing(102); // C
        let (service, _) = build_service(fetcher);

        let results = service.recommend(&RecommendationRequest::new("A")).await.unwrap();

        assert_eq!(results.len(), 5);
        let failed = results.iter().find(|r| r.movie.title == "C").unwrap();
        assert!(failed.detail.is_absent());
        assert!(results
            .iter()
            .filter(|r| r.movie.title != "C")
            .all(|r| !r.detail.is_absent()));
    }

    #[tokio::test]
    async fn test_filters_applied() {
        let fetcher = MockFetcher::default()
            .with_rating(101, 8.0)
            .with_genres(101, &["Action", "Adventure"])
            .with_rating(102, 6.0)
            .with_genres(102, &["Action"])
            .with_rating(103, 9.0)
            .with_genres(103, &["Romance"])
            .failing(104);
        let (service, _) = build_service(fetcher);

        let request = RecommendationRequest::new("A")
            .with_genres([Genre::Action, Genre::Romance])
            .with_min_rating(7.0);
        let results = service.recommend(&request).await.unwrap();

        assert_eq!(titles(&results), vec!["B", "D"]);
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_not_error() {
        let (service, _) = build_service(MockFetcher::default());

        let request = RecommendationRequest::new("A").with_min_rating(0.5);
        let results = service.recommend(&request).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_movie() {
        let (service, fetcher) = build_service(MockFetcher::default());

        let err = service
            .recommend(&RecommendationRequest::new("Not A Real Movie Title"))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RecommendError>(),
            Some(RecommendError::UnknownMovie { .. })
        ));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetches_run_concurrently() {
        let (service, fetcher) =
            build_service(MockFetcher::default().with_delay(Duration::from_millis(50)));

        let results = service.recommend(&RecommendationRequest::new("F")).await.unwrap();

        assert_eq!(titles(&results), vec!["E", "A", "D", "C", "B"]);
        assert!(fetcher.max_in_flight.load(Ordering::SeqCst) > 1);
    }

    #[tokio::test]
    async fn test_custom_filter_pipeline() {
        let (service, _) = build_service(MockFetcher::default());
        let service = service.with_filter_pipeline(FilterPipeline::new());

        let request = RecommendationRequest::new("A").with_min_rating(9.5);
        let results = service.recommend(&request).await.unwrap();
        assert_eq!(results.len(), 5);
    }

    #[tokio::test]
    async fn test_with_recommender_limit() {
        let (service, fetcher) = build_service(MockFetcher::default());
        let recommender = Recommender::new(service.catalog().clone()).with_limit(2);
        let service = service.with_recommender(recommender);

        let results = service.recommend(&RecommendationRequest::new("A")).await.unwrap();
        assert_eq!(titles(&results), vec!["B", "C"]);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }
}
