//! HTTP API server exposing the sales reports.
//!
//! Provides one `POST` endpoint per report, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use entity_store::EntityStore;
use metrics_exporter_prometheus::PrometheusHandle;
use reports::ReportService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::reports::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: EntityStore + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/clientes", post(routes::reports::list_customers::<S>))
        .route("/clientes/resumo", post(routes::reports::customers_summary::<S>))
        .route("/pedidos/resumo", post(routes::reports::orders_summary::<S>))
        .route("/pedidos/mais_comprados", post(routes::reports::top_products::<S>))
        .route(
            "/pedidos/mais_comprados_por_categoria",
            post(routes::reports::top_products_by_category::<S>),
        )
        .route(
            "/pedidos/mais_comprados_por_fornecedor",
            post(routes::reports::top_products_by_supplier::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state serving reports from `store`.
pub fn create_default_state<S: EntityStore + Clone + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        reports: ReportService::new(store),
    })
}
