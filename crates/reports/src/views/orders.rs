//! Order revenue reports: monthly totals, customer spend and fortnights.

use domain::{Money, Order};
use entity_store::Snapshot;
use serde::Serialize;

use crate::grouping::{Fortnight, group_stable, month_key};
use crate::ranked::RankedMap;
use crate::report::Report;

/// Number of customers kept in the spend ranking.
pub const TOP_CUSTOMERS_LIMIT: usize = 10;

/// Formatted totals of the two halves of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FortnightTotals {
    /// Days 1 through 15.
    #[serde(rename = "primeira")]
    pub first: String,
    /// Day 16 onwards.
    #[serde(rename = "segunda")]
    pub second: String,
}

/// Output of [`OrdersSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdersSummaryOutput {
    #[serde(rename = "totalPedidos")]
    pub monthly_totals: RankedMap<String>,
    #[serde(rename = "topClientes")]
    pub top_customers: RankedMap<String>,
    #[serde(rename = "totalPedidosPorQuinzena")]
    pub fortnight_totals: RankedMap<FortnightTotals>,
}

/// Unformatted split of one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FortnightSplit {
    pub first: Money,
    pub second: Money,
}

impl FortnightSplit {
    pub fn total(&self) -> Money {
        self.first + self.second
    }
}

/// Revenue per month, per customer and per half-month.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdersSummary;

impl Report for OrdersSummary {
    type Output = OrdersSummaryOutput;

    fn name(&self) -> &'static str {
        "orders-summary"
    }

    fn compute(&self, snapshot: &Snapshot) -> OrdersSummaryOutput {
        OrdersSummaryOutput {
            monthly_totals: format_totals(monthly_totals(snapshot.orders())),
            top_customers: format_totals(customer_spend(snapshot)),
            fortnight_totals: fortnight_totals(snapshot.orders())
                .into_iter()
                .map(|(month, split)| {
                    let totals = FortnightTotals {
                        first: split.first.to_brl(),
                        second: split.second.to_brl(),
                    };
                    (month, totals)
                })
                .collect(),
        }
    }
}

/// Sums order totals per `YYYY-MM`, highest month first.
pub fn monthly_totals(orders: &[Order]) -> Vec<(String, Money)> {
    let mut months: Vec<(String, Money)> = group_stable(orders, |o| month_key(o.order_date))
        .into_iter()
        .map(|(month, orders)| (month, orders.iter().map(|o| o.total_amount).sum()))
        .collect();
    months.sort_by(|a, b| b.1.cmp(&a.1));
    months
}

/// Sums order totals per customer full name and keeps the first
/// [`TOP_CUSTOMERS_LIMIT`] in ascending order of spend.
///
/// Lowest spenders come first. Customers without orders do not appear;
/// customers sharing a full name are merged.
pub fn customer_spend(snapshot: &Snapshot) -> Vec<(String, Money)> {
    let joined = snapshot
        .customers()
        .iter()
        .flat_map(|c| snapshot.orders_for_customer(c.id).map(move |o| (c, o)));

    let mut spend: Vec<(String, Money)> = group_stable(joined, |(c, _)| c.full_name())
        .into_iter()
        .map(|(name, rows)| (name, rows.iter().map(|(_, o)| o.total_amount).sum()))
        .collect();
    spend.sort_by(|a, b| a.1.cmp(&b.1));
    spend.truncate(TOP_CUSTOMERS_LIMIT);
    spend
}

/// Splits each month's total into days 1–15 and 16 onwards.
///
/// Months keep the order of their first order; they are not ranked.
pub fn fortnight_totals(orders: &[Order]) -> Vec<(String, FortnightSplit)> {
    group_stable(orders, |o| month_key(o.order_date))
        .into_iter()
        .map(|(month, orders)| {
            let mut split = FortnightSplit::default();
            for order in orders {
                match Fortnight::of(order.order_date) {
                    Fortnight::First => split.first += order.total_amount,
                    Fortnight::Second => split.second += order.total_amount,
                }
            }
            (month, split)
        })
        .collect()
}

fn format_totals(totals: Vec<(String, Money)>) -> RankedMap<String> {
    totals
        .into_iter()
        .map(|(key, total)| (key, total.to_brl()))
        .collect()
}
