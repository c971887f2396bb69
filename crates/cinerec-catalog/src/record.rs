//! Raw tabular records and schema validation
//!
//! A `RawRecord` is one row of the flat record source the catalog is loaded
//! from (the shape the upstream ingestion script materializes: title, year,
//! type, genre, platform, rating, overview). Records are loosely typed on
//! the wire; validation into a `CatalogEntry` happens at load time with a
//! typed error path for missing or malformed required fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an entry is a movie or a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    /// Feature film
    Movie,
    /// Episodic series
    Series,
}

impl TitleKind {
    /// Parse a kind from a record's `type` column.
    ///
    /// The upstream catalog is Spanish-language and uses `película` /
    /// `serie`; the English spellings are accepted as well. Matching is
    /// case-insensitive. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "película" | "pelicula" | "movie" | "film" => Some(Self::Movie),
            "serie" | "series" | "tv" => Some(Self::Series),
            _ => None,
        }
    }
}

impl fmt::Display for TitleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "series"),
        }
    }
}

/// One row of the flat record source, prior to validation
///
/// Deserializable with serde so any tabular carrier (CSV rows, JSON arrays)
/// can feed the catalog without this crate doing file I/O itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    /// Display title (required, non-empty after trimming)
    pub title: String,

    /// Release year as text, empty or missing means unknown
    #[serde(default)]
    pub year: String,

    /// Content kind column (`película`/`serie` or `movie`/`series`)
    #[serde(rename = "type")]
    pub kind: String,

    /// Comma-separated genre names
    #[serde(default)]
    pub genre: String,

    /// Comma-separated streaming providers
    #[serde(default)]
    pub platform: String,

    /// Average rating on a 0-10 scale
    #[serde(default)]
    pub rating: f32,

    /// Short synopsis, when the source provides one
    #[serde(default)]
    pub overview: Option<String>,
}

impl RawRecord {
    /// Convenience constructor for the minimal record shape.
    pub fn new(title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: String::new(),
            kind: kind.into(),
            genre: String::new(),
            platform: String::new(),
            rating: 0.0,
            overview: None,
        }
    }
}
