//! Eagerly loaded, read-only view of all entity tables.

use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;

use common::{CategoryId, CustomerId, OrderId, ProductId, SupplierId};
use domain::{Category, Customer, Order, OrderItem, Product, Supplier};

/// The six entity tables as plain vectors.
#[derive(Debug, Clone, Default)]
pub struct EntitySet {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub suppliers: Vec<Supplier>,
}

impl EntitySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A broken reference or duplicate key found by [`Snapshot::check_integrity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// Two rows of the same table share a key.
    DuplicateId { table: &'static str, id: i64 },

    /// A foreign key points at a row that does not exist.
    DanglingReference {
        table: &'static str,
        field: &'static str,
        id: i64,
    },
}

impl std::fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { table, id } => write!(f, "duplicate id {id} in {table}"),
            Self::DanglingReference { table, field, id } => {
                write!(f, "{table}.{field} references missing id {id}")
            }
        }
    }
}

/// Read-only snapshot of the entity tables plus the lookup indexes used
/// for hash joins.
///
/// Tables keep their load order; every index refers back into them by
/// position. When a key is duplicated, lookups resolve to the first row.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entities: EntitySet,
    customer_index: HashMap<CustomerId, usize>,
    product_index: HashMap<ProductId, usize>,
    category_index: HashMap<CategoryId, usize>,
    supplier_index: HashMap<SupplierId, usize>,
    /// Order lines per order, in load order.
    items_by_order: HashMap<OrderId, Vec<usize>>,
    /// Orders per customer, in load order.
    orders_by_customer: HashMap<CustomerId, Vec<usize>>,
}

impl Snapshot {
    /// Builds a snapshot and its join indexes from the given tables.
    pub fn new(entities: EntitySet) -> Self {
        let customer_index = first_positions(entities.customers.iter().map(|c| c.id));
        let product_index = first_positions(entities.products.iter().map(|p| p.id));
        let category_index = first_positions(entities.categories.iter().map(|c| c.id));
        let supplier_index = first_positions(entities.suppliers.iter().map(|s| s.id));

        let mut items_by_order: HashMap<OrderId, Vec<usize>> = HashMap::new();
        for (pos, item) in entities.order_items.iter().enumerate() {
            items_by_order.entry(item.order_id).or_default().push(pos);
        }

        let mut orders_by_customer: HashMap<CustomerId, Vec<usize>> = HashMap::new();
        for (pos, order) in entities.orders.iter().enumerate() {
            orders_by_customer
                .entry(order.customer_id)
                .or_default()
                .push(pos);
        }

        Self {
            entities,
            customer_index,
            product_index,
            category_index,
            supplier_index,
            items_by_order,
            orders_by_customer,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.entities.customers
    }

    pub fn orders(&self) -> &[Order] {
        &self.entities.orders
    }

    pub fn order_items(&self) -> &[OrderItem] {
        &self.entities.order_items
    }

    pub fn products(&self) -> &[Product] {
        &self.entities.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.entities.categories
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.entities.suppliers
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customer_index
            .get(&id)
            .map(|&pos| &self.entities.customers[pos])
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.product_index
            .get(&id)
            .map(|&pos| &self.entities.products[pos])
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.category_index
            .get(&id)
            .map(|&pos| &self.entities.categories[pos])
    }

    pub fn supplier(&self, id: SupplierId) -> Option<&Supplier> {
        self.supplier_index
            .get(&id)
            .map(|&pos| &self.entities.suppliers[pos])
    }

    /// Returns the lines of an order in load order.
    pub fn items_for_order(&self, order_id: OrderId) -> impl Iterator<Item = &OrderItem> {
        self.items_by_order
            .get(&order_id)
            .into_iter()
            .flatten()
            .map(|&pos| &self.entities.order_items[pos])
    }

    /// Returns the orders placed by a customer in load order.
    pub fn orders_for_customer(&self, customer_id: CustomerId) -> impl Iterator<Item = &Order> {
        self.orders_by_customer
            .get(&customer_id)
            .into_iter()
            .flatten()
            .map(|&pos| &self.entities.orders[pos])
    }

    /// Returns true when every table is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.customers.is_empty()
            && self.entities.orders.is_empty()
            && self.entities.order_items.is_empty()
            && self.entities.products.is_empty()
            && self.entities.categories.is_empty()
            && self.entities.suppliers.is_empty()
    }

    /// Lists duplicate keys and foreign keys that point nowhere.
    ///
    /// Reports assume this list is empty. An empty result means every
    /// order line, order and product joins to exactly one partner row.
    pub fn check_integrity(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();

        duplicates(
            "customers",
            self.entities.customers.iter().map(|c| c.id.as_i64()),
            &mut violations,
        );
        duplicates(
            "orders",
            self.entities.orders.iter().map(|o| o.id.as_i64()),
            &mut violations,
        );
        duplicates(
            "products",
            self.entities.products.iter().map(|p| p.id.as_i64()),
            &mut violations,
        );
        duplicates(
            "categories",
            self.entities.categories.iter().map(|c| c.id.as_i64()),
            &mut violations,
        );
        duplicates(
            "suppliers",
            self.entities.suppliers.iter().map(|s| s.id.as_i64()),
            &mut violations,
        );

        let order_ids: HashSet<OrderId> = self.entities.orders.iter().map(|o| o.id).collect();

        for order in &self.entities.orders {
            if self.customer(order.customer_id).is_none() {
                violations.push(IntegrityViolation::DanglingReference {
                    table: "orders",
                    field: "customer_id",
                    id: order.customer_id.as_i64(),
                });
            }
        }

        for item in &self.entities.order_items {
            if !order_ids.contains(&item.order_id) {
                violations.push(IntegrityViolation::DanglingReference {
                    table: "order_items",
                    field: "order_id",
                    id: item.order_id.as_i64(),
                });
            }
            if self.product(item.product_id).is_none() {
                violations.push(IntegrityViolation::DanglingReference {
                    table: "order_items",
                    field: "product_id",
                    id: item.product_id.as_i64(),
                });
            }
        }

        for product in &self.entities.products {
            if self.category(product.category_id).is_none() {
                violations.push(IntegrityViolation::DanglingReference {
                    table: "products",
                    field: "category_id",
                    id: product.category_id.as_i64(),
                });
            }
            if self.supplier(product.supplier_id).is_none() {
                violations.push(IntegrityViolation::DanglingReference {
                    table: "products",
                    field: "supplier_id",
                    id: product.supplier_id.as_i64(),
                });
            }
        }

        violations
    }
}

fn first_positions<K: std::hash::Hash + Eq>(keys: impl Iterator<Item = K>) -> HashMap<K, usize> {
    let mut index = HashMap::new();
    for (pos, key) in keys.enumerate() {
        index.entry(key).or_insert(pos);
    }
    index
}

fn duplicates(
    table: &'static str,
    ids: impl Iterator<Item = i64>,
    violations: &mut Vec<IntegrityViolation>,
) {
    let mut seen: HashMap<i64, bool> = HashMap::new();
    for id in ids {
        match seen.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(false);
            }
            Entry::Occupied(mut slot) => {
                // Report each duplicated key once.
                if !*slot.get() {
                    violations.push(IntegrityViolation::DuplicateId { table, id });
                    slot.insert(true);
                }
            }
        }
    }
}
