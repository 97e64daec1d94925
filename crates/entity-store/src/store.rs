use async_trait::async_trait;
use domain::{Category, Customer, Order, OrderItem, Product, Supplier};

use crate::Result;
use crate::snapshot::{EntitySet, Snapshot};

/// Read side of the entity tables the reports are computed from.
///
/// Every accessor returns an owned copy of its table, so a caller never
/// observes a write that happens after the call returns.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Returns all customers in load order.
    async fn customers(&self) -> Result<Vec<Customer>>;

    /// Returns all orders in load order.
    async fn orders(&self) -> Result<Vec<Order>>;

    /// Returns all order lines in load order.
    async fn order_items(&self) -> Result<Vec<OrderItem>>;

    /// Returns all products in load order.
    async fn products(&self) -> Result<Vec<Product>>;

    /// Returns all product categories.
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Returns all suppliers.
    async fn suppliers(&self) -> Result<Vec<Supplier>>;

    /// Returns every table read at one point in time.
    ///
    /// The default reads the tables one after another. Stores that can be
    /// written while reports run must override it to read all tables under
    /// a single guard.
    async fn entities(&self) -> Result<EntitySet> {
        Ok(EntitySet {
            customers: self.customers().await?,
            orders: self.orders().await?,
            order_items: self.order_items().await?,
            products: self.products().await?,
            categories: self.categories().await?,
            suppliers: self.suppliers().await?,
        })
    }
}

/// Extension trait providing convenience methods for entity stores.
#[async_trait]
pub trait EntityStoreExt: EntityStore {
    /// Loads every table eagerly and indexes it for joins.
    async fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot::new(self.entities().await?))
    }
}

// Blanket implementation for all EntityStore implementations
impl<T: EntityStore + ?Sized> EntityStoreExt for T {}
