//! Product ranking reports: best sellers by value and by quantity.

use domain::Money;
use entity_store::Snapshot;
use serde::Serialize;

use crate::grouping::group_stable;
use crate::joins::{SalesLine, sales_lines};
use crate::report::Report;

/// Number of products kept in each ranking.
pub const TOP_PRODUCTS_LIMIT: usize = 30;

/// One ranked (product, category) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRanking {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    /// Units sold across all order lines.
    #[serde(rename = "quantidade")]
    pub quantity: u64,
    /// Formatted sum of quantity × unit price.
    #[serde(rename = "valor")]
    pub value: String,
}

/// Output of [`TopProducts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProductsOutput {
    #[serde(rename = "produtosMaisCompradosPorValor")]
    pub by_value: Vec<ProductRanking>,
    #[serde(rename = "produtosMaisCompradosPorQuantidade")]
    pub by_quantity: Vec<ProductRanking>,
}

/// Totals of one (product name, category name) group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductTotals<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub quantity: u64,
    /// Unit price summed once per order line; ranks the "by value" list.
    pub price_sum: Money,
    /// Quantity × unit price summed over the order lines.
    pub value: Money,
}

impl ProductTotals<'_> {
    fn to_ranking(self) -> ProductRanking {
        ProductRanking {
            name: self.name.to_string(),
            category: self.category.to_string(),
            quantity: self.quantity,
            value: self.value.to_brl(),
        }
    }
}

/// The 30 best-selling products, ranked two ways.
///
/// The "by value" ranking orders groups by the summed unit price of their
/// order lines, not by line value. Both lists report the same quantity and
/// value figures; only their order differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopProducts;

impl Report for TopProducts {
    type Output = TopProductsOutput;

    fn name(&self) -> &'static str {
        "top-products"
    }

    fn compute(&self, snapshot: &Snapshot) -> TopProductsOutput {
        let totals = product_totals(&sales_lines(snapshot));

        TopProductsOutput {
            by_value: top(&totals, |a, b| b.price_sum.cmp(&a.price_sum)),
            by_quantity: top(&totals, |a, b| b.quantity.cmp(&a.quantity)),
        }
    }
}

/// Groups order lines by (product name, category name) in order of first
/// appearance.
pub fn product_totals<'a>(lines: &[SalesLine<'a>]) -> Vec<ProductTotals<'a>> {
    group_stable(lines, |l| (l.product.name.as_str(), l.category.name.as_str()))
        .into_iter()
        .map(|((name, category), lines)| ProductTotals {
            name,
            category,
            quantity: lines.iter().map(|l| u64::from(l.quantity())).sum(),
            price_sum: lines.iter().map(|l| l.product.price).sum(),
            value: lines.iter().map(|l| l.line_value()).sum(),
        })
        .collect()
}

fn top<F>(totals: &[ProductTotals<'_>], order: F) -> Vec<ProductRanking>
where
    F: Fn(&ProductTotals<'_>, &ProductTotals<'_>) -> std::cmp::Ordering,
{
    let mut ranked = totals.to_vec();
    ranked.sort_by(order);
    ranked
        .into_iter()
        .take(TOP_PRODUCTS_LIMIT)
        .map(ProductTotals::to_ranking)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain::{Category, Customer, Order, OrderItem, Product, Supplier};
    use entity_store::EntitySet;

    fn brl(text: &str) -> String {
        text.replace(' ', "\u{a0}")
    }

    /// One order holding the given (product id, quantity) lines.
    fn snapshot(products: Vec<Product>, lines: &[(i64, u32)]) -> Snapshot {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Snapshot::new(EntitySet {
            customers: vec![Customer::new(1, "Ana", "Souza")],
            orders: vec![Order::new(1, 1, date, Money::zero())],
            order_items: lines
                .iter()
                .map(|&(product, qty)| OrderItem::new(1, product, qty))
                .collect(),
            products,
            categories: vec![Category::new(1, "Papelaria"), Category::new(2, "Livros")],
            suppliers: vec![Supplier::new(1, "Acme")],
        })
    }

    #[test]
    fn test_value_ranking_uses_summed_unit_price() {
        // Cheap item bought in bulk vs expensive item bought once.
        let products = vec![
            Product::new(1, "Clipe", Money::from_cents(10), 1, 1),
            Product::new(2, "Atlas", Money::from_cents(5000), 2, 1),
        ];
        let out = TopProducts.compute(&snapshot(products, &[(1, 1000), (2, 1)]));

        assert_eq!(out.by_value[0].name, "Atlas");
        assert_eq!(out.by_value[1].name, "Clipe");
        // Reported value is still quantity × price.
        assert_eq!(out.by_value[1].value, brl("R$ 100,00"));
        assert_eq!(out.by_quantity[0].name, "Clipe");
    }

    #[test]
    fn test_lines_of_same_product_are_merged() {
        let products = vec![Product::new(1, "Caneta", Money::from_cents(250), 1, 1)];
        let out = TopProducts.compute(&snapshot(products, &[(1, 2), (1, 3)]));

        assert_eq!(out.by_value.len(), 1);
        let row = &out.by_value[0];
        assert_eq!(row.category, "Papelaria");
        assert_eq!(row.quantity, 5);
        assert_eq!(row.value, brl("R$ 12,50"));
        assert_eq!(out.by_quantity, out.by_value);
    }

    #[test]
    fn test_same_name_in_different_categories_stays_separate() {
        let products = vec![
            Product::new(1, "Agenda", Money::from_cents(1000), 1, 1),
            Product::new(2, "Agenda", Money::from_cents(1000), 2, 1),
        ];
        let out = TopProducts.compute(&snapshot(products, &[(1, 1), (2, 1)]));
        assert_eq!(out.by_value.len(), 2);
    }

    #[test]
    fn test_capped_at_limit_in_descending_order() {
        let products: Vec<_> = (1..=40i64)
            .map(|i| Product::new(i, format!("P{i:02}"), Money::from_cents(i * 10), 1, 1))
            .collect();
        let lines: Vec<(i64, u32)> = (1..=40i64).map(|i| (i, (41 - i) as u32)).collect();
        let out = TopProducts.compute(&snapshot(products, &lines));

        assert_eq!(out.by_value.len(), TOP_PRODUCTS_LIMIT);
        assert_eq!(out.by_quantity.len(), TOP_PRODUCTS_LIMIT);
        assert_eq!(out.by_value[0].name, "P40");
        assert_eq!(out.by_value[29].name, "P11");
        assert_eq!(out.by_quantity[0].name, "P01");
        assert!(
            out.by_quantity
                .windows(2)
                .all(|w| w[0].quantity >= w[1].quantity)
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let products = vec![Product::new(1, "Caneta", Money::from_cents(250), 1, 1)];
        let out = TopProducts.compute(&snapshot(products, &[(1, 4)]));
        let json = serde_json::to_value(&out).unwrap();

        let row = &json["produtosMaisCompradosPorValor"][0];
        assert_eq!(row["nome"], "Caneta");
        assert_eq!(row["categoria"], "Papelaria");
        assert_eq!(row["quantidade"], 4);
        assert_eq!(row["valor"], brl("R$ 10,00"));
        assert_eq!(json["produtosMaisCompradosPorQuantidade"][0], *row);
    }

    #[test]
    fn test_empty_snapshot() {
        let out = TopProducts.compute(&Snapshot::default());
        assert!(out.by_value.is_empty());
        assert!(out.by_quantity.is_empty());
    }
}
