use axum::{
    routing::{get, post},
    Router,
};
use contracts::dashboards::d402_seller_performance::PolicySelection;
use std::sync::Arc;

use crate::api::handlers;
use crate::dashboards::d402_seller_performance::PolicyRegistry;

/// Общее состояние обработчиков
pub struct AppState {
    pub registry: PolicyRegistry,
    /// Политики из config.toml, если запрос не передал options
    pub default_policies: PolicySelection,
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D402 SELLER PERFORMANCE
        // ========================================
        .route(
            "/api/d402/seller_performance",
            post(handlers::d402_seller_performance::build_report),
        )
        .route(
            "/api/d402/policies",
            get(handlers::d402_seller_performance::list_policies),
        )
        .with_state(state)
}
