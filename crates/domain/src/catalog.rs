//! Product catalog: products, categories and suppliers.

use common::{CategoryId, ProductId, SupplierId};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A product that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price per unit.
    pub price: Money,
    pub category_id: CategoryId,
    pub supplier_id: SupplierId,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category_id: impl Into<CategoryId>,
        supplier_id: impl Into<SupplierId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category_id: category_id.into(),
            supplier_id: supplier_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
}

impl Supplier {
    pub fn new(id: impl Into<SupplierId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
