use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // PAGE: layout, binding table, updates
        // ========================================
        .route(
            "/api/page/layout",
            get(handlers::d400_dock_demo::page_layout),
        )
        .route(
            "/api/page/dependencies",
            get(handlers::d400_dock_demo::dependencies),
        )
        .route("/api/page/update", post(handlers::d400_dock_demo::update))
        // ========================================
        // DOCK: read-only model inspection
        // ========================================
        .route("/api/dock/model", get(handlers::d400_dock_demo::dock_model))
        .route("/api/dock/stats", get(handlers::d400_dock_demo::dock_stats))
}
