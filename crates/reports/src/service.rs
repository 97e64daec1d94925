//! Runs reports against an entity store.

use std::time::Instant;

use entity_store::{EntityStore, EntityStoreExt};

use crate::Result;
use crate::report::Report;
use crate::views::{
    CategoryBreakdown, CustomerList, CustomersSummary, CustomersSummaryOutput, ListCustomers,
    OrdersSummary, OrdersSummaryOutput, SupplierBreakdown, TopProducts, TopProductsByCategory,
    TopProductsBySupplier, TopProductsOutput,
};

/// Entry point for the report operations.
///
/// Every call loads a fresh snapshot from the store, so a report reflects
/// the tables as they were when the call started and never observes a
/// later write.
#[derive(Clone)]
pub struct ReportService<S: EntityStore> {
    store: S,
}

impl<S: EntityStore> ReportService<S> {
    /// Creates a new service reading from the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Snapshots the store and computes `report` over it.
    #[tracing::instrument(skip(self, report), fields(report = report.name()))]
    pub async fn run<R: Report>(&self, report: &R) -> Result<R::Output> {
        let start = Instant::now();
        let snapshot = self.store.snapshot().await?;
        let output = report.compute(&snapshot);

        let elapsed = start.elapsed();
        metrics::counter!("reports_generated_total", "report" => report.name()).increment(1);
        metrics::histogram!("report_duration_seconds", "report" => report.name())
            .record(elapsed.as_secs_f64());
        tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "report computed");

        Ok(output)
    }

    /// Up to 100 customers ordered by first name.
    pub async fn list_customers(&self) -> Result<CustomerList> {
        self.run(&ListCustomers).await
    }

    /// Top 5 countries and email domains by customer count.
    pub async fn customers_summary(&self) -> Result<CustomersSummaryOutput> {
        self.run(&CustomersSummary).await
    }

    /// Monthly, per-customer and fortnightly revenue.
    pub async fn orders_summary(&self) -> Result<OrdersSummaryOutput> {
        self.run(&OrdersSummary).await
    }

    /// Top 30 products by value and by quantity.
    pub async fn top_products(&self) -> Result<TopProductsOutput> {
        self.run(&TopProducts).await
    }

    pub async fn top_products_by_category(&self) -> Result<CategoryBreakdown> {
        self.run(&TopProductsByCategory).await
    }

    pub async fn top_products_by_supplier(&self) -> Result<SupplierBreakdown> {
        self.run(&TopProductsBySupplier).await
    }
}
