//! Handlers for the `/tryouts` resource.
//!
//! Tryout updates and deletes are not gated by the submission lock; only
//! question mutations are (see [`super::question`]).

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tryout_core::error::CoreError;
use tryout_core::filter::TryoutFilter;
use tryout_db::models::tryout::TryoutInput;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, ValidatedJson};
use crate::query::TryoutFilterParams;
use crate::response::{map_all, CategoriesResponse, MessageResponse, TryoutResponse};
use crate::state::AppState;

/// GET /api/v1/tryouts
///
/// Without query parameters this lists every tryout. Any of `category`,
/// `minDuration` or `maxDuration` switches to the filtered search.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<TryoutFilterParams>, QueryRejection>,
) -> AppResult<Json<Vec<TryoutResponse>>> {
    let Query(params) = params.map_err(|rejection| {
        CoreError::Validation(format!("Invalid filter: {}", rejection.body_text()))
    })?;
    let filter = TryoutFilter::from(params);
    filter.validate()?;

    let tryouts = if filter.is_empty() {
        state.store.list_tryouts().await?
    } else {
        state.store.filter_tryouts(&filter).await?
    };
    Ok(Json(map_all(tryouts)))
}

/// POST /api/v1/tryouts
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<TryoutInput>,
) -> AppResult<(StatusCode, Json<TryoutResponse>)> {
    let tryout = state.store.create_tryout(&input).await?;
    tracing::info!(tryout_id = %tryout.id, category = %tryout.category, "Tryout created");
    Ok((StatusCode::CREATED, Json(tryout.into())))
}

/// GET /api/v1/tryouts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TryoutResponse>> {
    let id = parse_id("tryout", &id)?;
    let tryout = state
        .store
        .get_tryout(id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tryout", id)))?;
    Ok(Json(tryout.into()))
}

/// PUT /api/v1/tryouts/{id}
///
/// Allowed regardless of the submission lock.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<TryoutInput>,
) -> AppResult<Json<TryoutResponse>> {
    let id = parse_id("tryout", &id)?;
    let tryout = state
        .store
        .update_tryout(id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tryout", id)))?;
    Ok(Json(tryout.into()))
}

/// DELETE /api/v1/tryouts/{id}
///
/// Unconditional, even for locked tryouts. Questions are only removed when
/// `CASCADE_TRYOUT_DELETE` is enabled; otherwise they stay behind.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id("tryout", &id)?;
    if !state.store.delete_tryout(id).await? {
        return Err(AppError::Core(CoreError::not_found("Tryout", id)));
    }

    if state.config.cascade_tryout_delete {
        let removed = state.store.delete_questions_by_tryout(id).await?;
        tracing::info!(tryout_id = %id, removed, "Cascaded tryout delete to questions");
    }

    Ok(Json(MessageResponse {
        message: "Tryout deleted successfully",
    }))
}

/// GET /api/v1/tryouts/filter/options
pub async fn filter_options(State(state): State<AppState>) -> AppResult<Json<CategoriesResponse>> {
    let categories = state.store.distinct_categories().await?;
    Ok(Json(CategoriesResponse::from(categories)))
}
