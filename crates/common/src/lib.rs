//! Shared types for the sales reporting workspace.

pub mod types;

pub use types::{CategoryId, CustomerId, OrderId, ProductId, SupplierId};
