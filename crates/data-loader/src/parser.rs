//! Parsers for the two catalog artifacts.
//!
//! - movies.dat: `movieId::title`, one movie per line, in matrix order
//! - similarity.json: a JSON array of N rows, each an array of N numbers

use crate::error::{CatalogError, Result};
use crate::index::MOVIES_FILE;
use crate::types::MovieRecord;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read a whole file, mapping a missing file to `FileNotFound`
fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Decode text as UTF-8, falling back to ISO-8859-1 (Latin-1).
///
/// Older exports of the movie list are Latin-1; every byte maps directly
/// to the code point of the same value.
fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// Parse the movies file.
///
/// Format: `movieId::title`. The title is everything after the first
/// separator, so titles may themselves contain `::`. Blank lines are
/// skipped and do not count as catalog positions.
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let content = decode_text(read_bytes(path)?);
    parse_movies_str(&content)
}

pub(crate) fn parse_movies_str(content: &str) -> Result<Vec<MovieRecord>> {
    let mut movies = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue;
        }

        let mut parts = line_trimmed.splitn(2, "::");

        let movie_id = parts
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ParseErrorAt::new(line_no).reason("Missing movieId"))?;

        let title = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ParseErrorAt::new(line_no).reason("Missing title"))?;

        let movie = MovieRecord {
            id: movie_id.trim().parse().map_err(|e| {
                ParseErrorAt::new(line_no).reason(format!("Invalid movieId: {}", e))
            })?,
            title: title.to_string(),
        };

        movies.push(movie);
    }

    Ok(movies)
}

/// Parse the similarity matrix file into rows.
///
/// Shape checks (square, matching the movie count) happen when the
/// catalog is assembled.
pub fn parse_similarity(path: &Path) -> Result<Vec<Vec<f32>>> {
    let bytes = read_bytes(path)?;
    let rows: Vec<Vec<f32>> = serde_json::from_slice(&bytes)?;
    Ok(rows)
}

/// Builds `ParseError`s for movies.dat at a given line
struct ParseErrorAt {
    line: usize,
}

impl ParseErrorAt {
    fn new(line: usize) -> Self {
        Self { line }
    }

    fn reason(self, reason: impl Into<String>) -> CatalogError {
        CatalogError::ParseError {
            file: MOVIES_FILE.to_string(),
            line: self.line,
            reason: reason.into(),
        }
    }
}
