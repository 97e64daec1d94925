//! Order and order line entities.

use chrono::NaiveDateTime;
use common::{CustomerId, OrderId, ProductId};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub order_date: NaiveDateTime,
    pub total_amount: Money,
}

impl Order {
    /// Creates a new order.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        order_date: NaiveDateTime,
        total_amount: Money,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            order_date,
            total_amount,
        }
    }
}

/// One line of an order.
///
/// The unit price lives on the product; a line only records how many
/// units were bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderItem {
    /// Creates a new order line.
    pub fn new(
        order_id: impl Into<OrderId>,
        product_id: impl Into<ProductId>,
        quantity: u32,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            product_id: product_id.into(),
            quantity,
        }
    }

    /// Returns the value of this line at the given unit price.
    pub fn line_total(&self, unit_price: Money) -> Money {
        unit_price.multiply(self.quantity)
    }
}
