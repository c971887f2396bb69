//! Error types for engine operations
//!
//! Precondition violations (`NotInitialized`, `IndexOutOfRange`) indicate a
//! sequencing bug in the caller and propagate uncaught. "No match for this
//! query" is not an error anywhere in this crate; it is an empty result.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Engine errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The vectorizer was given zero documents
    #[error("corpus contains no documents")]
    EmptyCorpus,

    /// A query arrived before any snapshot was loaded
    #[error("no snapshot loaded; call load() first")]
    NotInitialized,

    /// A row index fell outside the vector space
    #[error("row index {index} out of range for {len} rows")]
    IndexOutOfRange {
        /// The offending row index
        index: usize,
        /// Number of rows in the vector space
        len: usize,
    },

    /// The catalog layer rejected the input
    #[error(transparent)]
    Catalog(#[from] cinerec_catalog::Error),
}
