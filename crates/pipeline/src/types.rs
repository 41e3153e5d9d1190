//! Request and result types shared by the filters and the sort.

use data_loader::MovieRecord;
use metadata::MovieDetail;
use recommender::Recommendation;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound of the minimum-rating control (TMDB ratings are 0-10)
pub const MAX_RATING: f32 = 10.0;
/// Granularity of the minimum-rating control
pub const RATING_STEP: f32 = 0.5;

/// Errors from parsing user-supplied request options
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseRequestError {
    #[error("Unknown genre '{0}' (expected one of: {})", Genre::names().join(", "))]
    UnknownGenre(String),

    #[error("Unknown sort mode '{0}' (expected 'similarity' or 'rating')")]
    UnknownSortMode(String),

    #[error("Invalid rating '{0}'")]
    InvalidRating(String),

    #[error("Minimum rating {0} is outside 0.0-10.0")]
    RatingOutOfRange(f32),

    #[error("Minimum rating {0} is not a multiple of 0.5")]
    RatingNotOnStep(f32),
}

// =============================================================================
// Genre
// =============================================================================

/// Genres offered by the genre filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Romance,
    SciFi,
    Thriller,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    /// Display name, as offered to the user
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Genre::name).collect()
    }

    /// Names this genre may appear under in fetched metadata.
    ///
    /// TMDB calls Sci-Fi "Science Fiction".
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Genre::SciFi => &["Sci-Fi", "Science Fiction"],
            Genre::Action => &["Action"],
            Genre::Comedy => &["Comedy"],
            Genre::Drama => &["Drama"],
            Genre::Fantasy => &["Fantasy"],
            Genre::Horror => &["Horror"],
            Genre::Romance => &["Romance"],
            Genre::Thriller => &["Thriller"],
        }
    }

    /// Substring match against a comma-joined genre list
    pub fn matches(&self, genres: &str) -> bool {
        self.aliases().iter().any(|alias| genres.contains(alias))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Genre {
    type Err = ParseRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match wanted.as_str() {
            "scifi" | "science fiction" => return Ok(Genre::SciFi),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|g| g.name().to_lowercase() == wanted)
            .ok_or_else(|| ParseRequestError::UnknownGenre(s.to_string()))
    }
}

// =============================================================================
// Sort mode
// =============================================================================

/// Order in which recommendations are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Most similar first (the recommender's order)
    #[default]
    Similarity,
    /// Highest fetched rating first, unrated last
    Rating,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Similarity => f.write_str("Similarity"),
            SortMode::Rating => f.write_str("Rating"),
        }
    }
}

impl FromStr for SortMode {
    type Err = ParseRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "similarity" => Ok(SortMode::Similarity),
            "rating" => Ok(SortMode::Rating),
            _ => Err(ParseRequestError::UnknownSortMode(s.to_string())),
        }
    }
}

/// Parse a minimum rating: 0.0 to 10.0 in steps of 0.5
pub fn parse_min_rating(s: &str) -> Result<f32, ParseRequestError> {
    let value: f32 = s
        .trim()
        .parse()
        .map_err(|_| ParseRequestError::InvalidRating(s.to_string()))?;
    if !(0.0..=MAX_RATING).contains(&value) {
        return Err(ParseRequestError::RatingOutOfRange(value));
    }
    if (value / RATING_STEP).fract() != 0.0 {
        return Err(ParseRequestError::RatingNotOnStep(value));
    }
    Ok(value)
}

// =============================================================================
// Request and results
// =============================================================================

/// One user action: a title plus the sort and filter settings
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub selected_title: String,
    pub sort_mode: SortMode,
    /// Empty means no genre filtering
    pub genre_filter: BTreeSet<Genre>,
    /// Inclusive lower bound on the fetched rating
    pub min_rating: f32,
}

impl RecommendationRequest {
    pub fn new(selected_title: impl Into<String>) -> Self {
        Self {
            selected_title: selected_title.into(),
            sort_mode: SortMode::Similarity,
            genre_filter: BTreeSet::new(),
            min_rating: 0.0,
        }
    }

    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = Genre>) -> Self {
        self.genre_filter.extend(genres);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = min_rating;
        self
    }
}

/// A recommendation together with its fetched details
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedMovie {
    /// Catalog position
    pub index: usize,
    pub movie: MovieRecord,
    /// Similarity to the selected movie
    pub score: f32,
    pub detail: MovieDetail,
}

impl RecommendedMovie {
    pub fn new(recommendation: Recommendation, detail: MovieDetail) -> Self {
        Self {
            index: recommendation.index,
            movie: recommendation.movie,
            score: recommendation.score,
            detail,
        }
    }
}
