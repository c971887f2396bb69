//! cinerec-engine - Content-Similarity Recommendation Core
//!
//! Builds a term-weighted (TF-IDF) vector representation of catalog titles
//! and retrieves nearest neighbors by cosine similarity. The queryable unit
//! is an immutable [`Snapshot`] (catalog + vector space); the [`Engine`]
//! wrapper publishes snapshots with an atomic swap so recommendation reads
//! run in parallel against a consistent generation while a reload builds
//! the next one off to the side.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Error types for engine operations.
pub mod error;
/// Query resolution and neighbor ranking.
pub mod recommend;
/// Cosine similarity over the vector space.
pub mod similarity;
/// Snapshot construction and the atomic-swap engine.
pub mod snapshot;
/// Stop-word sets for vocabulary exclusion.
pub mod stopwords;
/// Tokenization and TF-IDF vectorization.
pub mod vectorize;

pub use error::{Error, Result};
pub use recommend::{Recommendation, DEFAULT_TOP_N};
pub use snapshot::{Engine, Snapshot};
pub use stopwords::StopWords;
pub use vectorize::{TermVectorSpace, TfidfVectorizer};

/// Engine library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
