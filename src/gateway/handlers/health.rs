//! Health check handler

use std::sync::Arc;

use axum::{Json, extract::State};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse};

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// Pings the account store. Store details are logged, never returned.
///
/// - Healthy: 200 OK + {code: 0, data: {timestamp_ms}}
/// - Unhealthy: 503 Service Unavailable + {code: 5003, msg: "unavailable"}
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;

    let store = state.accounts.store();
    if let Err(e) = store.ping().await {
        tracing::error!("[HEALTH] {} store ping failed: {}", store.name(), e);
        return Err(ApiError::service_unavailable("unavailable"));
    }

    Ok(Json(ApiResponse::success(HealthResponse {
        timestamp_ms: now_ms,
    })))
}
