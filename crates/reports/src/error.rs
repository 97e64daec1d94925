//! Report error types.

use thiserror::Error;

/// Errors that can occur while producing a report.
///
/// Report computations themselves cannot fail; only loading the snapshot
/// they run on can.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The entity store could not provide a snapshot.
    #[error("Entity store error: {0}")]
    Store(#[from] entity_store::StoreError),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
