//! Route definitions for the `/tryouts` resource.
//!
//! Also nests question routes under `/tryouts/{id}/questions`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{question, tryout};
use crate::state::AppState;

/// Routes mounted at `/tryouts`.
///
/// ```text
/// GET    /                                  -> list (optional filter query)
/// POST   /                                  -> create
/// GET    /filter/options                    -> filter_options
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{id}/questions                    -> list_by_tryout
/// POST   /{id}/questions                    -> create
/// GET    /{id}/questions/{question_id}      -> get_by_id
/// PUT    /{id}/questions/{question_id}      -> update
/// DELETE /{id}/questions/{question_id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    let question_routes = Router::new()
        .route(
            "/",
            get(question::list_by_tryout).post(question::create),
        )
        .route(
            "/{question_id}",
            get(question::get_by_id)
                .put(question::update)
                .delete(question::delete),
        );

    Router::new()
        .route("/", get(tryout::list).post(tryout::create))
        .route("/filter/options", get(tryout::filter_options))
        .route(
            "/{id}",
            get(tryout::get_by_id)
                .put(tryout::update)
                .delete(tryout::delete),
        )
        .nest("/{id}/questions", question_routes)
}
