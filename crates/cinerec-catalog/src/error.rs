//! Error types for catalog operations

use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The record source contained no rows
    #[error("catalog is empty: record source contained no rows")]
    Empty,

    /// A record failed schema validation
    #[error("invalid record at row {row}: {reason}")]
    InvalidRecord {
        /// 0-based row index in the record source
        row: usize,
        /// What was wrong with the record
        reason: String,
    },

    /// Lookup by id found no entry
    #[error("no catalog entry with id {id}")]
    NotFound {
        /// The id that was requested
        id: u32,
    },
}
