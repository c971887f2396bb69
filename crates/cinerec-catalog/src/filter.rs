//! Criteria filtering over catalog entries
//!
//! Mirrors the browse-by-criteria flows of the original assistant: kind,
//! genre, and platform narrow the catalog, with genre and platform matched
//! case-insensitively as substrings of their comma-separated columns.

use crate::catalog::CatalogEntry;
use crate::record::TitleKind;
use serde::{Deserialize, Serialize};

/// Conjunction of optional criteria over catalog entries
///
/// An empty filter matches every entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Restrict to movies or series
    pub kind: Option<TitleKind>,

    /// Genre name, matched case-insensitively within the genre column
    pub genre: Option<String>,

    /// Provider name, matched case-insensitively within the platform column
    pub platform: Option<String>,

    /// Minimum rating, inclusive
    pub min_rating: Option<f32>,
}

impl CatalogFilter {
    /// Filter matching every entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given kind.
    pub fn with_kind(mut self, kind: TitleKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restrict to entries listing the given genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Restrict to entries available on the given platform.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Restrict to entries rated at least `rating`.
    pub fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Whether the entry satisfies every criterion.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }

        if let Some(genre) = &self.genre {
            if !contains_ignore_case(&entry.genre, genre) {
                return false;
            }
        }

        if let Some(platform) = &self.platform {
            if !contains_ignore_case(&entry.platform, platform) {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if entry.rating < min_rating {
                return false;
            }
        }

        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
