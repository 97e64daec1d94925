//! Per-supplier breakdown of sold products.

use entity_store::Snapshot;
use serde::Serialize;

use crate::collation::collation_key;
use crate::grouping::group_stable;
use crate::joins::supplier_lines;
use crate::ranked::RankedMap;
use crate::report::Report;

/// Number of line rows listed under each supplier.
pub const LINES_PER_SUPPLIER: usize = 30;

/// One order line listed under its product's supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierLine {
    pub product_name: String,
    pub category_name: String,
    pub quantity: u32,
    pub valor: String,
}

/// Output of [`TopProductsBySupplier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierBreakdown {
    #[serde(rename = "maisCompradosPorFornecedor")]
    pub by_supplier: RankedMap<Vec<SupplierLine>>,
}

/// Suppliers in alphabetical order, each listing the order lines of its
/// products.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopProductsBySupplier;

impl Report for TopProductsBySupplier {
    type Output = SupplierBreakdown;

    fn name(&self) -> &'static str {
        "top-products-by-supplier"
    }

    fn compute(&self, snapshot: &Snapshot) -> SupplierBreakdown {
        let lines = supplier_lines(snapshot);
        let mut groups = group_stable(&lines, |(_, supplier)| supplier.name.as_str());
        groups.sort_by_cached_key(|(name, _)| collation_key(name));

        let by_supplier = groups
            .into_iter()
            .map(|(name, lines)| {
                let rows = lines
                    .into_iter()
                    .take(LINES_PER_SUPPLIER)
                    .map(|(line, _)| SupplierLine {
                        product_name: line.product.name.clone(),
                        category_name: line.category.name.clone(),
                        quantity: line.quantity(),
                        valor: line.line_value().to_brl(),
                    })
                    .collect();
                (name, rows)
            })
            .collect();

        SupplierBreakdown { by_supplier }
    }
}
