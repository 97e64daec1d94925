//! Seed loading from a JSON document.
//!
//! The document mirrors the source tables and their column names:
//!
//! ```json
//! {
//!   "customers":   [{"customer_id": 1, "first_name": "Ana", "last_name": "Souza",
//!                    "email": "ana@example.com", "country": "Brazil"}],
//!   "orders":      [{"order_id": 1, "customer_id": 1,
//!                    "order_date": "2024-03-15T10:30:00", "total_amount": 199.9}],
//!   "order_items": [{"order_id": 1, "product_id": 1, "quantity": 2}],
//!   "products":    [{"product_id": 1, "product_name": "Caneta", "price": 2.5,
//!                    "category_id": 1, "supplier_id": 1}],
//!   "categories":  [{"category_id": 1, "category_name": "Papelaria"}],
//!   "suppliers":   [{"supplier_id": 1, "supplier_name": "Acme"}]
//! }
//! ```
//!
//! Every table key is optional; unknown columns are ignored. Money columns
//! accept a JSON number or a decimal string and are read exactly, so
//! `1.005` stays `1.005`.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use domain::{Category, Customer, DomainError, Money, Order, OrderItem, Product, Supplier};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::memory::InMemoryEntityStore;
use crate::snapshot::{EntitySet, Snapshot};
use crate::{Result, StoreError};

/// Raw seed document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub customers: Vec<CustomerRecord>,
    pub orders: Vec<OrderRecord>,
    pub order_items: Vec<OrderItemRecord>,
    pub products: Vec<ProductRecord>,
    pub categories: Vec<CategoryRecord>,
    pub suppliers: Vec<SupplierRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrderRecord {
    pub order_id: i64,
    pub customer_id: i64,
    pub order_date: String,
    pub total_amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct OrderItemRecord {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    pub product_id: i64,
    pub product_name: String,
    pub price: Decimal,
    pub category_id: i64,
    pub supplier_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRecord {
    pub category_id: i64,
    pub category_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SupplierRecord {
    pub supplier_id: i64,
    pub supplier_name: String,
}

impl SeedData {
    /// Parses a seed document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a seed file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Converts the raw rows into entities and checks referential integrity.
    pub fn into_entities(self) -> Result<EntitySet> {
        let customers = self.customers.into_iter().map(customer).collect();
        let orders = self
            .orders
            .into_iter()
            .map(order)
            .collect::<Result<Vec<_>>>()?;
        let order_items = self
            .order_items
            .into_iter()
            .map(order_item)
            .collect::<Result<Vec<_>>>()?;
        let products = self
            .products
            .into_iter()
            .map(product)
            .collect::<Result<Vec<_>>>()?;
        let categories = self
            .categories
            .into_iter()
            .map(|r| Category::new(r.category_id, r.category_name))
            .collect();
        let suppliers = self
            .suppliers
            .into_iter()
            .map(|r| Supplier::new(r.supplier_id, r.supplier_name))
            .collect();

        let entities = EntitySet {
            customers,
            orders,
            order_items,
            products,
            categories,
            suppliers,
        };

        let violations = Snapshot::new(entities.clone()).check_integrity();
        if !violations.is_empty() {
            for violation in &violations {
                tracing::warn!(%violation, "seed integrity violation");
            }
            return Err(StoreError::Integrity(violations));
        }

        Ok(entities)
    }
}

/// Parses and validates a seed document, then replaces the tables of `store`.
pub async fn load_json(store: &InMemoryEntityStore, json: &str) -> Result<()> {
    load_seed(store, SeedData::from_json(json)?).await
}

/// Reads a seed file and replaces the tables of `store` with it.
#[tracing::instrument(skip(store))]
pub async fn load_file(store: &InMemoryEntityStore, path: &Path) -> Result<()> {
    load_seed(store, SeedData::from_file(path)?).await
}

async fn load_seed(store: &InMemoryEntityStore, seed: SeedData) -> Result<()> {
    let entities = seed.into_entities()?;
    store.load(entities).await;

    let counts = store.counts().await;
    tracing::info!(
        customers = counts.customers,
        orders = counts.orders,
        order_items = counts.order_items,
        products = counts.products,
        "seed data loaded"
    );
    Ok(())
}

fn customer(r: CustomerRecord) -> Customer {
    Customer {
        id: r.customer_id.into(),
        first_name: r.first_name,
        last_name: r.last_name,
        email: r.email,
        country: r.country,
    }
}

fn order(r: OrderRecord) -> Result<Order> {
    let order_date = parse_order_date(&r.order_date).ok_or_else(|| StoreError::InvalidDate {
        order_id: r.order_id,
        value: r.order_date.clone(),
    })?;
    let total_amount = non_negative_money("total_amount", r.total_amount)
        .map_err(|source| StoreError::InvalidRow {
            table: "orders",
            source,
        })?;
    Ok(Order::new(r.order_id, r.customer_id, order_date, total_amount))
}

fn order_item(r: OrderItemRecord) -> Result<OrderItem> {
    let quantity = u32::try_from(r.quantity).map_err(|_| StoreError::InvalidRow {
        table: "order_items",
        source: DomainError::InvalidQuantity {
            quantity: r.quantity,
        },
    })?;
    Ok(OrderItem::new(r.order_id, r.product_id, quantity))
}

fn product(r: ProductRecord) -> Result<Product> {
    let price =
        non_negative_money("price", r.price).map_err(|source| StoreError::InvalidRow {
            table: "products",
            source,
        })?;
    Ok(Product::new(
        r.product_id,
        r.product_name,
        price,
        r.category_id,
        r.supplier_id,
    ))
}

fn non_negative_money(
    field: &'static str,
    value: Decimal,
) -> std::result::Result<Money, DomainError> {
    let amount = Money::from_decimal(value);
    if amount.is_negative() {
        return Err(DomainError::NegativeAmount { field, amount });
    }
    if value > Money::MAX_AMOUNT {
        return Err(DomainError::AmountOutOfRange { field, amount });
    }
    Ok(amount)
}

/// Accepts `2024-03-15T10:30:00`, `2024-03-15 10:30:00` (optionally with
/// fractional seconds) and a bare `2024-03-15`.
fn parse_order_date(value: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    let value = value.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
