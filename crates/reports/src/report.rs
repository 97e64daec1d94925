//! Core report trait.

use entity_store::Snapshot;
use serde::Serialize;

/// A named, fixed aggregation over a snapshot.
///
/// Reports are pure: the same snapshot always yields the same output, and
/// computing one never mutates the snapshot. Any number of reports may run
/// concurrently against a shared snapshot.
pub trait Report: Send + Sync {
    /// The serializable result of this report.
    type Output: Serialize + Send;

    /// Returns the operation name of this report, e.g. `"orders-summary"`.
    fn name(&self) -> &'static str;

    /// Computes the report.
    fn compute(&self, snapshot: &Snapshot) -> Self::Output;
}
