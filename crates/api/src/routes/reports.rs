//! Report endpoints.
//!
//! Every report is a `POST` without a request body; the response is the
//! report's JSON document.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use entity_store::EntityStore;
use reports::{
    CategoryBreakdown, CustomerList, CustomersSummaryOutput, OrdersSummaryOutput, ReportService,
    SupplierBreakdown, TopProductsOutput,
};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: EntityStore> {
    pub reports: ReportService<S>,
}

/// POST /clientes — customers ordered by first name.
#[tracing::instrument(skip(state))]
pub async fn list_customers<S: EntityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<CustomerList>, ApiError> {
    Ok(Json(state.reports.list_customers().await?))
}

/// POST /clientes/resumo — country and email-domain distributions.
#[tracing::instrument(skip(state))]
pub async fn customers_summary<S: EntityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<CustomersSummaryOutput>, ApiError> {
    Ok(Json(state.reports.customers_summary().await?))
}

/// POST /pedidos/resumo — monthly, per-customer and fortnightly revenue.
#[tracing::instrument(skip(state))]
pub async fn orders_summary<S: EntityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<OrdersSummaryOutput>, ApiError> {
    Ok(Json(state.reports.orders_summary().await?))
}

/// POST /pedidos/mais_comprados — best-selling products.
#[tracing::instrument(skip(state))]
pub async fn top_products<S: EntityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<TopProductsOutput>, ApiError> {
    Ok(Json(state.reports.top_products().await?))
}

/// POST /pedidos/mais_comprados_por_categoria
#[tracing::instrument(skip(state))]
pub async fn top_products_by_category<S: EntityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<CategoryBreakdown>, ApiError> {
    Ok(Json(state.reports.top_products_by_category().await?))
}

/// POST /pedidos/mais_comprados_por_fornecedor
#[tracing::instrument(skip(state))]
pub async fn top_products_by_supplier<S: EntityStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<SupplierBreakdown>, ApiError> {
    Ok(Json(state.reports.top_products_by_supplier().await?))
}
