//! Handlers for the `/questions` resource.
//!
//! Questions are nested under tryouts:
//! `/tryouts/{id}/questions[/{question_id}]`
//!
//! Every mutation asks the [`ConsistencyGuard`](tryout_db::ConsistencyGuard)
//! first. Body validation runs before that, inside the extractor.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tryout_core::error::CoreError;
use tryout_core::lock::QuestionMutation;
use tryout_db::models::question::QuestionInput;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, ValidatedJson};
use crate::response::{map_all, MessageResponse, QuestionResponse};
use crate::state::AppState;

/// GET /api/v1/tryouts/{id}/questions
///
/// Does not check that the tryout exists; an unknown tryout lists nothing.
pub async fn list_by_tryout(
    State(state): State<AppState>,
    Path(tryout_id): Path<String>,
) -> AppResult<Json<Vec<QuestionResponse>>> {
    let tryout_id = parse_id("tryout", &tryout_id)?;
    let questions = state.store.list_questions_by_tryout(tryout_id).await?;
    Ok(Json(map_all(questions)))
}

/// GET /api/v1/tryouts/{id}/questions/{question_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((tryout_id, id)): Path<(String, String)>,
) -> AppResult<Json<QuestionResponse>> {
    let tryout_id = parse_id("tryout", &tryout_id)?;
    let id = parse_id("question", &id)?;
    let question = state
        .store
        .get_question(tryout_id, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Question", id)))?;
    Ok(Json(question.into()))
}

/// POST /api/v1/tryouts/{id}/questions
pub async fn create(
    State(state): State<AppState>,
    Path(tryout_id): Path<String>,
    ValidatedJson(input): ValidatedJson<QuestionInput>,
) -> AppResult<(StatusCode, Json<QuestionResponse>)> {
    let tryout_id = parse_id("tryout", &tryout_id)?;
    state
        .guard
        .ensure_question_mutation_allowed(tryout_id, QuestionMutation::Create)
        .await?;

    let question = state.store.create_question(tryout_id, &input).await?;
    tracing::info!(%tryout_id, question_id = %question.id, "Question created");
    Ok((StatusCode::CREATED, Json(question.into())))
}

/// PUT /api/v1/tryouts/{id}/questions/{question_id}
pub async fn update(
    State(state): State<AppState>,
    Path((tryout_id, id)): Path<(String, String)>,
    ValidatedJson(input): ValidatedJson<QuestionInput>,
) -> AppResult<Json<QuestionResponse>> {
    let tryout_id = parse_id("tryout", &tryout_id)?;
    let id = parse_id("question", &id)?;
    state
        .guard
        .ensure_question_mutation_allowed(tryout_id, QuestionMutation::Update)
        .await?;

    let question = state
        .store
        .update_question(tryout_id, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Question", id)))?;
    Ok(Json(question.into()))
}

/// DELETE /api/v1/tryouts/{id}/questions/{question_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((tryout_id, id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    let tryout_id = parse_id("tryout", &tryout_id)?;
    let id = parse_id("question", &id)?;
    state
        .guard
        .ensure_question_mutation_allowed(tryout_id, QuestionMutation::Delete)
        .await?;

    if !state.store.delete_question(tryout_id, id).await? {
        return Err(AppError::Core(CoreError::not_found("Question", id)));
    }
    Ok(Json(MessageResponse {
        message: "Question deleted successfully",
    }))
}
