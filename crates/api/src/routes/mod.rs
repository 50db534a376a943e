pub mod health;
pub mod tryouts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tryouts                                         list (filterable), create
/// /tryouts/filter/options                          distinct categories
/// /tryouts/{id}                                    get, update, delete
/// /tryouts/{id}/questions                          list, create
/// /tryouts/{id}/questions/{question_id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/tryouts", tryouts::router())
}
