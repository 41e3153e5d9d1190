//! Normalized movie details and the TMDB payload they are built from.

use crate::config::TmdbConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OVERVIEW: &str = "No overview available.";
pub const DEFAULT_RELEASE_DATE: &str = "Unknown release date.";
/// Shown for a missing rating or runtime
pub const NOT_AVAILABLE: &str = "N/A";
pub const POSTER_NOT_AVAILABLE: &str = "Poster not available";

/// Enriched metadata for one recommended movie.
///
/// Produced per fetch and never cached. A failed fetch yields the absent
/// detail: every optional field `None`, no genres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Catalog title of the movie
    pub title: String,
    /// Empty when TMDB has no poster for the movie
    pub poster_url: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    /// TMDB vote average on a 0-10 scale
    pub rating: Option<f32>,
    pub runtime_minutes: Option<u32>,
    pub genres: Vec<String>,
    pub imdb_url: Option<String>,
}

impl MovieDetail {
    /// Detail for a movie whose fetch failed
    pub fn absent(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            poster_url: None,
            overview: None,
            release_date: None,
            rating: None,
            runtime_minutes: None,
            genres: Vec::new(),
            imdb_url: None,
        }
    }

    /// Map a TMDB payload, filling the documented defaults
    pub fn from_tmdb(title: impl Into<String>, movie: TmdbMovie, config: &TmdbConfig) -> Self {
        let poster_url = match movie.poster_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => format!(
                "{}/{}",
                config.image_base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            _ => String::new(),
        };

        let imdb_url = movie
            .imdb_id
            .filter(|id| !id.trim().is_empty())
            .map(|id| format!("{}{}", config.imdb_base_url, id.trim()));

        Self {
            title: title.into(),
            poster_url: Some(poster_url),
            overview: Some(movie.overview.unwrap_or_else(|| DEFAULT_OVERVIEW.to_string())),
            release_date: Some(
                movie
                    .release_date
                    .unwrap_or_else(|| DEFAULT_RELEASE_DATE.to_string()),
            ),
            rating: movie.vote_average,
            runtime_minutes: movie.runtime,
            genres: movie
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| g.name)
                .collect(),
            imdb_url,
        }
    }

    /// True when the fetch behind this detail failed
    pub fn is_absent(&self) -> bool {
        self.poster_url.is_none()
            && self.overview.is_none()
            && self.release_date.is_none()
            && self.rating.is_none()
            && self.runtime_minutes.is_none()
            && self.genres.is_empty()
            && self.imdb_url.is_none()
    }

    /// Genres joined with ", "
    pub fn genres_display(&self) -> String {
        self.genres.join(", ")
    }

    pub fn rating_display(&self) -> String {
        self.rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn runtime_display(&self) -> String {
        self.runtime_minutes
            .map(|m| format!("{} minutes", m))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn overview_display(&self) -> &str {
        self.overview.as_deref().unwrap_or(DEFAULT_OVERVIEW)
    }

    pub fn release_date_display(&self) -> &str {
        self.release_date.as_deref().unwrap_or(DEFAULT_RELEASE_DATE)
    }

    /// Poster URL if there is one worth showing
    pub fn poster(&self) -> Option<&str> {
        self.poster_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn poster_display(&self) -> &str {
        self.poster().unwrap_or(POSTER_NOT_AVAILABLE)
    }
}

/// Fields read from `GET /movie/{id}`. Everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovie {
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f32>,
    pub runtime: Option<u32>,
    pub genres: Option<Vec<TmdbGenre>>,
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> MovieDetail {
        let movie: TmdbMovie = serde_json::from_str(json).unwrap();
        MovieDetail::from_tmdb("Inception", movie, &TmdbConfig::new("key"))
    }

    #[test]
    fn test_full_payload() {
        let detail = parse(
            r#"{
                "id": 27205,
                "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
                "overview": "A thief who steals corporate secrets.",
                "release_date": "2010-07-15",
                "vote_average": 8.364,
                "runtime": 148,
                "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
                "imdb_id": "tt1375666"
            }"#,
        );

        assert_eq!(
            detail.poster_url.as_deref(),
            Some("http://image.tmdb.org/t/p/w500/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg")
        );
        assert_eq!(detail.overview_display(), "A thief who steals corporate secrets.");
        assert_eq!(detail.release_date.as_deref(), Some("2010-07-15"));
        assert_eq!(detail.rating, Some(8.364));
        assert_eq!(detail.rating_display(), "8.4");
        assert_eq!(detail.runtime_minutes, Some(148));
        assert_eq!(detail.runtime_display(), "148 minutes");
        assert_eq!(
            detail.poster_display(),
            "http://image.tmdb.org/t/p/w500/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg"
        );
        assert_eq!(detail.genres_display(), "Action, Science Fiction");
        assert_eq!(
            detail.imdb_url.as_deref(),
            Some("https://www.imdb.com/title/tt1375666")
        );
        assert!(!detail.is_absent());
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let detail = parse("{}");

        assert_eq!(detail.title, "Inception");
        assert_eq!(detail.poster_url.as_deref(), Some(""));
        assert!(detail.poster().is_none());
        assert_eq!(detail.poster_display(), POSTER_NOT_AVAILABLE);
        assert_eq!(detail.overview.as_deref(), Some(DEFAULT_OVERVIEW));
        assert_eq!(detail.release_date.as_deref(), Some(DEFAULT_RELEASE_DATE));
        assert_eq!(detail.rating, None);
        assert_eq!(detail.rating_display(), "N/A");
        assert_eq!(detail.runtime_display(), "N/A");
        assert!(detail.genres.is_empty());
        assert!(detail.imdb_url.is_none());
    }

    #[test]
    fn test_null_fields_get_defaults() {
        let detail = parse(
            r#"{"poster_path": null, "overview": null, "runtime": null, "genres": null, "imdb_id": ""}"#,
        );

        assert_eq!(detail.poster_url.as_deref(), Some(""));
        assert_eq!(detail.overview.as_deref(), Some(DEFAULT_OVERVIEW));
        assert!(detail.runtime_minutes.is_none());
        assert!(detail.imdb_url.is_none());
    }

    #[test]
    fn test_absent_detail() {
        let detail = MovieDetail::absent("Heat");

        assert!(detail.is_absent());
        assert_eq!(detail.title, "Heat");
        assert_eq!(detail.rating_display(), "N/A");
        assert_eq!(detail.overview_display(), DEFAULT_OVERVIEW);
        assert_eq!(detail.genres_display(), "");
    }
}
