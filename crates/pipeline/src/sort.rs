//! Ordering of fetched recommendations.

use crate::types::{RecommendedMovie, SortMode};
use std::cmp::Ordering;

/// Order results for presentation.
///
/// - `Similarity`: score descending, ties by catalog position
/// - `Rating`: fetched rating descending, unrated last; the sort is stable
///   so equal ratings keep their incoming order
pub fn sort_results(results: &mut [RecommendedMovie], sort_mode: SortMode) {
    match sort_mode {
        SortMode::Similarity => results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.index.cmp(&b.index))
        }),
        SortMode::Rating => {
            results.sort_by(|a, b| rating_order(a.detail.rating, b.detail.rating))
        }
    }
}

/// Highest rating first; a missing rating ranks below any number
fn rating_order(a: Option<f32>, b: Option<f32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::MovieRecord;
    use metadata::MovieDetail;

    fn result(index: usize, score: f32, rating: Option<f32>) -> RecommendedMovie {
        let mut detail = MovieDetail::absent(format!("Movie {}", index));
        detail.rating = rating;
        RecommendedMovie {
            index,
            movie: MovieRecord::new(index as u32, format!("Movie {}", index)),
            score,
            detail,
        }
    }

    fn indices(results: &[RecommendedMovie]) -> Vec<usize> {
        results.iter().map(|r| r.index).collect()
    }

    #[test]
    fn test_sort_by_rating_puts_unrated_last() {
        let mut results = vec![
            result(1, 0.9, Some(6.1)),
            result(2, 0.8, None),
            result(3, 0.7, Some(8.0)),
            result(4, 0.6, Some(6.1)),
            result(5, 0.5, Some(7.2)),
        ];

        sort_results(&mut results, SortMode::Rating);
        // 1 and 4 tie on rating and keep their similarity order
        assert_eq!(indices(&results), vec![3, 5, 1, 4, 2]);
    }

    #[test]
    fn test_sort_by_similarity_restores_order() {
        let mut results = vec![
            result(4, 0.5, Some(9.0)),
            result(2, 0.8, None),
            result(3, 0.5, Some(1.0)),
            result(1, 0.9, Some(5.0)),
        ];

        sort_results(&mut results, SortMode::Similarity);
        assert_eq!(indices(&results), vec![1, 2, 3, 4]);
    }
}
