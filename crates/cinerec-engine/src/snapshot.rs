//! Snapshot construction and the atomic-swap engine
//!
//! A [`Snapshot`] pairs one catalog generation with the vector space built
//! from it; the pair is immutable and always consistent. The [`Engine`]
//! owns the current generation behind an `RwLock<Option<Arc<..>>>`: a
//! reload builds the next snapshot entirely off to the side and publishes
//! it with a single pointer swap, so in-flight readers keep their `Arc` to
//! the old generation and never observe a catalog paired with a stale or
//! half-built matrix.

use crate::error::{Error, Result};
use crate::vectorize::{TermVectorSpace, TfidfVectorizer};
use cinerec_catalog::{Catalog, CatalogEntry, Error as CatalogError, RawRecord};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use tracing::info;

/// One immutable, queryable generation of the index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    catalog: Catalog,
    vectors: TermVectorSpace,
}

impl Snapshot {
    /// Validate records into a catalog and build its vector space.
    ///
    /// The indexed text per entry is the overview when present, otherwise
    /// the title. Fails with [`Error::EmptyCorpus`] on a zero-row source
    /// and with the catalog's validation errors on malformed rows.
    pub fn build(records: Vec<RawRecord>) -> Result<Self> {
        Self::build_with(records, &TfidfVectorizer::new())
    }

    /// Like [`Snapshot::build`], with a caller-configured vectorizer.
    pub fn build_with(records: Vec<RawRecord>, vectorizer: &TfidfVectorizer) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let catalog = Catalog::from_records(records)?;
        let corpus: Vec<&str> = catalog.iter().map(CatalogEntry::indexable_text).collect();
        let vectors = vectorizer.fit(&corpus)?;

        debug_assert_eq!(catalog.len(), vectors.len());
        Ok(Self { catalog, vectors })
    }

    /// The catalog of this generation.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The vector space of this generation.
    pub fn vectors(&self) -> &TermVectorSpace {
        &self.vectors
    }

    /// Entry with the given id, or `NotFound`.
    pub fn by_id(&self, id: u32) -> Result<&CatalogEntry> {
        self.catalog
            .get(id)
            .ok_or_else(|| CatalogError::NotFound { id }.into())
    }
}

/// Holder of the live snapshot, single-writer many-reader
///
/// Queries clone the `Arc` under a brief read lock and then run lock-free
/// against that generation. `load` is the only writer.
#[derive(Debug, Default)]
pub struct Engine {
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl Engine {
    /// Engine with no snapshot loaded; queries fail with `NotInitialized`
    /// until [`Engine::load`] succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from `records` and publish it atomically.
    ///
    /// On failure the previous generation, if any, stays live.
    pub fn load(&self, records: Vec<RawRecord>) -> Result<Arc<Snapshot>> {
        let snapshot = Arc::new(Snapshot::build(records)?);

        let mut current = self.current.write().expect("snapshot lock poisoned");
        *current = Some(Arc::clone(&snapshot));
        drop(current);

        info!(
            entries = snapshot.catalog().len(),
            terms = snapshot.vectors().term_count(),
            "snapshot published"
        );
        Ok(snapshot)
    }

    /// Whether a snapshot has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .expect("snapshot lock poisoned")
            .is_some()
    }

    /// The live generation, or `NotInitialized` before the first load.
    pub fn snapshot(&self) -> Result<Arc<Snapshot>> {
        self.current
            .read()
            .expect("snapshot lock poisoned")
            .clone()
            .ok_or(Error::NotInitialized)
    }

    /// [`Snapshot::recommend`] against the live generation.
    pub fn recommend(&self, query: &str, top_n: usize) -> Result<Vec<crate::Recommendation>> {
        self.snapshot()?.recommend(query, top_n)
    }

    /// [`Snapshot::recommend_for`] against the live generation.
    pub fn recommend_for(&self, id: u32, top_n: usize) -> Result<Vec<crate::Recommendation>> {
        self.snapshot()?.recommend_for(id, top_n)
    }

    /// Entry with the given id in the live generation.
    pub fn by_id(&self, id: u32) -> Result<CatalogEntry> {
        Ok(self.snapshot()?.by_id(id)?.clone())
    }
}
