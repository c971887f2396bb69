//! Catalog table, entries, and sampling
//!
//! The catalog is an ordered, immutable sequence of validated entries.
//! Ids are dense, 0-based, and assigned by row position at load time, so
//! lookup by id is O(1) and a reload reassigns ids.

use crate::error::{Error, Result};
use crate::filter::CatalogFilter;
use crate::record::{RawRecord, TitleKind};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Genres known to the upstream catalog, in menu order.
///
/// Callers building genre pickers iterate this list rather than scanning
/// the loaded catalog for distinct values.
pub const GENRES: [&str; 18] = [
    "Acción",
    "Aventura",
    "Animación",
    "Comedia",
    "Crimen",
    "Documental",
    "Drama",
    "Familiar",
    "Fantasía",
    "Historia",
    "Terror",
    "Música",
    "Misterio",
    "Romance",
    "Ciencia ficción",
    "Suspenso",
    "Bélica",
    "Western",
];

/// One validated, immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Dense 0-based id, stable for the lifetime of one loaded catalog
    pub id: u32,

    /// Display title (non-empty)
    pub title: String,

    /// Movie or series
    pub kind: TitleKind,

    /// Comma-separated streaming providers
    pub platform: String,

    /// Average rating, clamped to 0.0-10.0
    pub rating: f32,

    /// Comma-separated genre names
    pub genre: String,

    /// Release year as text, "N/A" when unknown
    pub year: String,

    /// Short synopsis, when the source provided one
    pub overview: Option<String>,
}

impl CatalogEntry {
    /// Validate one raw record into an entry with the given id.
    fn from_record(id: u32, record: RawRecord) -> Result<Self> {
        let row = id as usize;

        let title = record.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidRecord {
                row,
                reason: "title is empty".to_string(),
            });
        }

        let kind = TitleKind::parse(&record.kind).ok_or_else(|| Error::InvalidRecord {
            row,
            reason: format!("unknown type {:?}", record.kind),
        })?;

        if !record.rating.is_finite() {
            return Err(Error::InvalidRecord {
                row,
                reason: "rating is not a finite number".to_string(),
            });
        }

        let year = match record.year.trim() {
            "" => "N/A".to_string(),
            y => y.to_string(),
        };

        let overview = record
            .overview
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty());

        Ok(Self {
            id,
            title: title.to_string(),
            kind,
            platform: record.platform.trim().to_string(),
            rating: record.rating.clamp(0.0, 10.0),
            genre: record.genre.trim().to_string(),
            year,
            overview,
        })
    }

    /// The text the similarity model indexes for this entry.
    ///
    /// The overview when the source provided one, otherwise the title.
    pub fn indexable_text(&self) -> &str {
        self.overview.as_deref().unwrap_or(&self.title)
    }
}

/// Ordered, immutable sequence of catalog entries for one generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate an ordered record source into a catalog.
    ///
    /// Ids are assigned from row positions. Fails with [`Error::Empty`] on a
    /// zero-row source and [`Error::InvalidRecord`] on the first row that
    /// does not satisfy the schema.
    pub fn from_records(records: Vec<RawRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::Empty);
        }

        let entries = records
            .into_iter()
            .enumerate()
            .map(|(row, record)| CatalogEntry::from_record(row as u32, record))
            .collect::<Result<Vec<_>>>()?;

        debug!(entries = entries.len(), "catalog loaded");
        Ok(Self { entries })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id. O(1).
    pub fn get(&self, id: u32) -> Option<&CatalogEntry> {
        self.entries.get(id as usize)
    }

    /// Iterate over all entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// All entries in id order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Resolve a free-text query to the first matching entry.
    ///
    /// Matches case-insensitively on the title, partial matches permitted;
    /// when several titles contain the query the entry with the lowest id
    /// wins. This mirrors the original lookup behavior and is a documented
    /// simplification, not a relevance ranking.
    pub fn find_by_title(&self, query: &str) -> Option<&CatalogEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.title.to_lowercase().contains(&needle))
    }

    /// Entries satisfying every criterion of the filter, in id order.
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .collect()
    }

    /// One uniformly random entry, `None` if the catalog is empty.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&CatalogEntry> {
        self.entries.choose(rng)
    }

    /// Up to `n` distinct random entries, fewer if the catalog is smaller.
    ///
    /// Order within the sample is arbitrary.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<&CatalogEntry> {
        let amount = n.min(self.entries.len());
        self.entries.choose_multiple(rng, amount).collect()
    }
}
