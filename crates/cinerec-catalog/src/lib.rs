//! cinerec-catalog - Catalog Store
//!
//! In-memory table of recommendable titles (movies and series), built once
//! from a flat record source and immutable for the lifetime of one loaded
//! generation. Lookup is by dense 0-based id; a reload replaces the whole
//! catalog, never mutates it in place.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Catalog table, entries, and sampling.
pub mod catalog;
/// Error types for catalog operations.
pub mod error;
/// Criteria filtering over catalog entries.
pub mod filter;
/// Raw tabular records and schema validation.
pub mod record;

pub use catalog::{Catalog, CatalogEntry, GENRES};
pub use error::{Error, Result};
pub use filter::CatalogFilter;
pub use record::{RawRecord, TitleKind};

/// Catalog library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
