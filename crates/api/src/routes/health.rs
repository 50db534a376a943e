use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the store is reachable.
    pub db_healthy: bool,
}

/// Root banner listing the main entry points.
#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: [&'static str; 3],
}

/// GET /health -- returns service and store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.store.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the store");
            false
        }
    };

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET / -- confirms the API is up and points at the tryout endpoints.
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Tryout API is running",
        endpoints: [
            "/api/v1/tryouts",
            "/api/v1/tryouts/{id}",
            "/api/v1/tryouts/filter/options",
        ],
    })
}

/// Mount root-level routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}
