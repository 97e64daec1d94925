//! Domain layer for the sales reporting workspace.
//!
//! This crate provides the read-only entities the reports are computed from:
//! - [`Customer`], [`Order`] and [`OrderItem`] for the sales side
//! - [`Product`], [`Category`] and [`Supplier`] for the catalog side
//! - [`Money`], an exact decimal rendered as Brazilian Real

pub mod catalog;
pub mod customer;
pub mod error;
pub mod money;
pub mod order;

pub use catalog::{Category, Product, Supplier};
pub use common::{CategoryId, CustomerId, OrderId, ProductId, SupplierId};
pub use customer::Customer;
pub use error::DomainError;
pub use money::Money;
pub use order::{Order, OrderItem};
