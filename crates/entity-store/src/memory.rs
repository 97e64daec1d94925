use std::sync::Arc;

use async_trait::async_trait;
use domain::{Category, Customer, Order, OrderItem, Product, Supplier};
use tokio::sync::RwLock;

use crate::{EntitySet, Result, store::EntityStore};

/// In-memory entity store.
///
/// Tables are filled once at start-up and read through [`EntityStore`].
/// Cloning shares the same underlying tables.
#[derive(Clone, Default)]
pub struct InMemoryEntityStore {
    tables: Arc<RwLock<EntitySet>>,
}

impl InMemoryEntityStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given tables.
    pub fn with_entities(entities: EntitySet) -> Self {
        Self {
            tables: Arc::new(RwLock::new(entities)),
        }
    }

    /// Replaces every table with `entities` in one write.
    ///
    /// Reports running concurrently see either the old tables or the new
    /// ones, never a mix.
    pub async fn load(&self, entities: EntitySet) {
        *self.tables.write().await = entities;
    }

    /// Returns the row count of each table.
    pub async fn counts(&self) -> TableCounts {
        let tables = self.tables.read().await;
        TableCounts {
            customers: tables.customers.len(),
            orders: tables.orders.len(),
            order_items: tables.order_items.len(),
            products: tables.products.len(),
            categories: tables.categories.len(),
            suppliers: tables.suppliers.len(),
        }
    }

    /// Removes all rows.
    pub async fn clear(&self) {
        *self.tables.write().await = EntitySet::default();
    }
}

/// Number of rows per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub customers: usize,
    pub orders: usize,
    pub order_items: usize,
    pub products: usize,
    pub categories: usize,
    pub suppliers: usize,
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn customers(&self) -> Result<Vec<Customer>> {
        Ok(self.tables.read().await.customers.clone())
    }

    async fn orders(&self) -> Result<Vec<Order>> {
        Ok(self.tables.read().await.orders.clone())
    }

    async fn order_items(&self) -> Result<Vec<OrderItem>> {
        Ok(self.tables.read().await.order_items.clone())
    }

    async fn products(&self) -> Result<Vec<Product>> {
        Ok(self.tables.read().await.products.clone())
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn suppliers(&self) -> Result<Vec<Supplier>> {
        Ok(self.tables.read().await.suppliers.clone())
    }

    async fn entities(&self) -> Result<EntitySet> {
        Ok(self.tables.read().await.clone())
    }
}
