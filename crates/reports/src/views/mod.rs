//! The six sales reports.

pub mod categories;
pub mod customers;
pub mod orders;
pub mod products;
pub mod suppliers;

pub use categories::{CategoryBreakdown, CategoryLine, TopProductsByCategory};
pub use customers::{CustomerList, CustomerListing, CustomersSummary, CustomersSummaryOutput, ListCustomers};
pub use orders::{FortnightTotals, OrdersSummary, OrdersSummaryOutput};
pub use products::{ProductRanking, TopProducts, TopProductsOutput};
pub use suppliers::{SupplierBreakdown, SupplierLine, TopProductsBySupplier};
