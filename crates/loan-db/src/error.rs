//! Storage errors for loan-db.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The schema batch or a connection pragma failed on open.
    #[error("Schema setup failed: {0}")]
    Migration(String),

    /// An aggregate query came back with no row.
    #[error("No result returned")]
    NoResult,

    /// A stored value does not decode (bad timestamp, impossible count).
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
