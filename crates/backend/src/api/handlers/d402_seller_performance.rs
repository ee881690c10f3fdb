use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use contracts::dashboards::d402_seller_performance::{
    PolicyCatalogResponse, SellerPerformanceRequest, SellerPerformanceResponse,
};
use std::sync::Arc;

use crate::dashboards::d402_seller_performance::{analyze, AnalysisError};
use crate::routes::AppState;
use crate::shared::logger::CollectingLogger;

/// POST /api/d402/seller_performance
///
/// Request `options` replace the configured default policy pair as a whole.
pub async fn build_report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SellerPerformanceRequest>,
) -> Result<Json<SellerPerformanceResponse>, (StatusCode, String)> {
    let selection = request
        .options
        .unwrap_or_else(|| state.default_policies.clone());
    let options = state.registry.resolve(&selection);
    let logger = CollectingLogger::new("d402");

    match analyze(request.data.as_ref(), &options, &logger) {
        Ok(sellers) => {
            tracing::info!("D402 Dashboard: Returning {} sellers", sellers.len());
            Ok(Json(SellerPerformanceResponse {
                generated_at: Utc::now(),
                sellers,
                diagnostics: logger.into_entries(),
            }))
        }
        Err(e) => {
            tracing::error!("D402 Dashboard: Failed to build report: {}", e);
            Err((status_for(&e), e.to_string()))
        }
    }
}

/// GET /api/d402/policies
pub async fn list_policies(State(state): State<Arc<AppState>>) -> Json<PolicyCatalogResponse> {
    Json(state.registry.catalog())
}

fn status_for(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AnalysisError::UnknownSeller { .. } | AnalysisError::UnknownProduct { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}
