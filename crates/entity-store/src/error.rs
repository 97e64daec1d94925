use thiserror::Error;

use crate::snapshot::IntegrityViolation;

/// Errors that can occur when loading or reading entities.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The seed file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not valid JSON or has the wrong shape.
    #[error("Seed deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// A row could not be turned into a domain entity.
    #[error("Invalid {table} row: {source}")]
    InvalidRow {
        table: &'static str,
        #[source]
        source: domain::DomainError,
    },

    /// An order date could not be parsed.
    #[error("Invalid order date {value:?} for order {order_id}")]
    InvalidDate { order_id: i64, value: String },

    /// The loaded data breaks referential integrity.
    #[error("{} integrity violation(s)", .0.len())]
    Integrity(Vec<IntegrityViolation>),
}

/// Result type for entity store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
