//! In-memory aggregation engine for the sales reports.
//!
//! This crate turns a [`Snapshot`](entity_store::Snapshot) of the entity
//! tables into summary views:
//! - [`Report`] trait implemented by one unit struct per report
//! - [`ReportService`] for running reports against an entity store
//! - [`grouping`], [`joins`], [`ranked`] and [`collation`] building blocks
//!   shared by the views
//! - Six views: customer listing, customer distributions, order revenue,
//!   top products, per-category and per-supplier breakdowns

pub mod collation;
pub mod error;
pub mod grouping;
pub mod joins;
pub mod ranked;
pub mod report;
pub mod service;
pub mod views;

pub use error::{ReportError, Result};
pub use ranked::RankedMap;
pub use report::Report;
pub use service::ReportService;
pub use views::{
    CategoryBreakdown, CustomerList, CustomersSummary, CustomersSummaryOutput, ListCustomers,
    OrdersSummary, OrdersSummaryOutput, SupplierBreakdown, TopProducts, TopProductsByCategory,
    TopProductsBySupplier, TopProductsOutput,
};
