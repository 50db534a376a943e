use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tryout_core::error::CoreError;
use tryout_db::{GuardError, StoreError};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for
/// infrastructure failures. The remaining variants come from the router's
/// fallbacks and middleware. Implements [`IntoResponse`] to produce
/// consistent `{ "error": ..., "code": ... }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tryout_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store could not be reached or did not answer in time.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No route matches the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// The path exists but not for this method.
    #[error("{method} is not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    /// The request did not finish within the configured request timeout.
    #[error("Request timed out after {0:?}")]
    TimedOut(Duration),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<GuardError> for AppError {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::Core(core) => AppError::Core(core),
            GuardError::Store(store) => AppError::Store(store),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::InvalidIdentifier(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_IDENTIFIER", msg.clone())
                }
                CoreError::Locked(msg) => (StatusCode::BAD_REQUEST, "LOCKED", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Store errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- HTTP-specific errors ---
            AppError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("No route for {path}"),
            ),
            AppError::MethodNotAllowed { method, path } => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                format!("{method} is not allowed on {path}"),
            ),
            AppError::TimedOut(after) => {
                tracing::error!(timeout = ?after, "Request timed out");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_TIMEOUT",
                    format!("Request did not complete within {}s", after.as_secs()),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Log a store failure with its context and map it to a 500.
///
/// The client sees a sanitized message; the driver error only goes to logs.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    let operation = err.operation();
    let entity_id = err.entity_id().map(|id| id.to_hex());
    match err {
        StoreError::Unavailable { source, .. } => {
            tracing::error!(
                operation,
                entity_id = entity_id.as_deref(),
                error = %source,
                "Store unavailable"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_UNAVAILABLE",
                format!("Failed to {}", describe(operation)),
            )
        }
        StoreError::Timeout { after, .. } => {
            tracing::error!(
                operation,
                entity_id = entity_id.as_deref(),
                timeout = ?after,
                "Store call timed out"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_TIMEOUT",
                format!("Timed out trying to {}", describe(operation)),
            )
        }
    }
}

/// Human wording for a store operation name (`get_tryout` -> `get tryout`).
fn describe(operation: &str) -> String {
    operation.replace('_', " ")
}
