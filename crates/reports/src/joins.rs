//! Hash joins from orders down to their catalog rows.

use domain::{Category, Money, Order, OrderItem, Product, Supplier};
use entity_store::Snapshot;

/// One order line joined with its order, product, category and supplier.
#[derive(Debug, Clone, Copy)]
pub struct SalesLine<'a> {
    pub order: &'a Order,
    pub item: &'a OrderItem,
    pub product: &'a Product,
    pub category: &'a Category,
    /// `None` when the product's supplier is missing; only the supplier
    /// report requires it.
    pub supplier: Option<&'a Supplier>,
}

impl SalesLine<'_> {
    pub fn quantity(&self) -> u32 {
        self.item.quantity
    }

    /// Quantity times unit price.
    pub fn line_value(&self) -> Money {
        self.item.line_total(self.product.price)
    }
}

/// Joins Order ⋈ OrderItem ⋈ Product ⋈ Category.
///
/// Lines come out grouped by order, orders in load order and lines of one
/// order in load order. Lines missing a partner row are dropped, as in an
/// inner join; integrity is a precondition, so any drop is logged.
pub fn sales_lines(snapshot: &Snapshot) -> Vec<SalesLine<'_>> {
    let lines: Vec<SalesLine<'_>> = snapshot
        .orders()
        .iter()
        .flat_map(|order| {
            snapshot.items_for_order(order.id).filter_map(move |item| {
                let product = snapshot.product(item.product_id)?;
                let category = snapshot.category(product.category_id)?;
                Some(SalesLine {
                    order,
                    item,
                    product,
                    category,
                    supplier: snapshot.supplier(product.supplier_id),
                })
            })
        })
        .collect();

    let dropped = snapshot.order_items().len().saturating_sub(lines.len());
    if dropped > 0 {
        tracing::warn!(dropped, "order lines without a matching order, product or category");
    }

    lines
}

/// Like [`sales_lines`], additionally requiring the supplier.
pub fn supplier_lines(snapshot: &Snapshot) -> Vec<(SalesLine<'_>, &Supplier)> {
    let lines = sales_lines(snapshot);
    let total = lines.len();
    let joined: Vec<_> = lines
        .into_iter()
        .filter_map(|line| line.supplier.map(|supplier| (line, supplier)))
        .collect();

    if joined.len() < total {
        tracing::warn!(
            dropped = total - joined.len(),
            "order lines whose product has no matching supplier"
        );
    }

    joined
}
