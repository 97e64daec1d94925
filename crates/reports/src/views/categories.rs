//! Per-category breakdown of sold products.

use domain::Money;
use entity_store::Snapshot;
use serde::Serialize;

use crate::grouping::group_stable;
use crate::joins::{SalesLine, sales_lines};
use crate::ranked::RankedMap;
use crate::report::Report;

/// Number of line rows listed under each category.
pub const LINES_PER_CATEGORY: usize = 30;

/// One order line listed under its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLine {
    pub product_name: String,
    pub quantity: u32,
    pub valor: String,
}

impl From<&SalesLine<'_>> for CategoryLine {
    fn from(line: &SalesLine<'_>) -> Self {
        Self {
            product_name: line.product.name.clone(),
            quantity: line.quantity(),
            valor: line.line_value().to_brl(),
        }
    }
}

/// Output of [`TopProductsByCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    #[serde(rename = "nomeDaCategoriaPorValor")]
    pub by_value: RankedMap<Vec<CategoryLine>>,
    #[serde(rename = "nomeDaCategoriaPorQuantidade")]
    pub by_quantity: RankedMap<Vec<CategoryLine>>,
}

/// Categories ranked by sold value and by sold quantity, each listing its
/// order lines.
///
/// Lines are listed as joined, one row per order line; several rows may
/// name the same product.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopProductsByCategory;

impl Report for TopProductsByCategory {
    type Output = CategoryBreakdown;

    fn name(&self) -> &'static str {
        "top-products-by-category"
    }

    fn compute(&self, snapshot: &Snapshot) -> CategoryBreakdown {
        let lines = sales_lines(snapshot);
        let groups = group_stable(&lines, |l| l.category.name.as_str());

        let mut by_value: Vec<(Money, &str, &[&SalesLine<'_>])> = groups
            .iter()
            .map(|(name, lines)| (lines.iter().map(|l| l.line_value()).sum(), *name, &lines[..]))
            .collect();
        by_value.sort_by(|a, b| b.0.cmp(&a.0));

        let mut by_quantity: Vec<(u64, &str, &[&SalesLine<'_>])> = groups
            .iter()
            .map(|(name, lines)| {
                let units = lines.iter().map(|l| u64::from(l.quantity())).sum();
                (units, *name, &lines[..])
            })
            .collect();
        by_quantity.sort_by(|a, b| b.0.cmp(&a.0));

        CategoryBreakdown {
            by_value: by_value
                .into_iter()
                .map(|(_, name, lines)| (name, listing(lines)))
                .collect(),
            by_quantity: by_quantity
                .into_iter()
                .map(|(_, name, lines)| (name, listing(lines)))
                .collect(),
        }
    }
}

fn listing(lines: &[&SalesLine<'_>]) -> Vec<CategoryLine> {
    lines
        .iter()
        .take(LINES_PER_CATEGORY)
        .map(|l| CategoryLine::from(*l))
        .collect()
}
