//! Read-only entity store for the sales reporting workspace.
//!
//! - [`EntityStore`] trait with one accessor per table
//! - [`InMemoryEntityStore`], filled once at start-up
//! - [`Snapshot`], an eager copy of all tables with join indexes
//! - [`seed`] for loading the tables from a JSON document

pub mod error;
pub mod memory;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::{InMemoryEntityStore, TableCounts};
pub use seed::SeedData;
pub use snapshot::{EntitySet, IntegrityViolation, Snapshot};
pub use store::{EntityStore, EntityStoreExt};
