//! Repository for the `questions` table.
//!
//! Lookups that take both a tryout id and a question id match on both, so a
//! question addressed through the wrong tryout behaves as missing.

use sqlx::PgPool;
use tryout_core::types::EntityId;

use crate::models::question::{Question, QuestionInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tryout_id, text, is_true, created_at, updated_at";

/// Provides CRUD operations for questions scoped to a tryout.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question under `tryout_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        id: EntityId,
        tryout_id: EntityId,
        input: &QuestionInput,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (id, tryout_id, text, is_true)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id.as_uuid())
            .bind(tryout_id.as_uuid())
            .bind(&input.text)
            .bind(input.is_true)
            .fetch_one(pool)
            .await
    }

    /// List the questions of a tryout, oldest first.
    pub async fn list_by_tryout(
        pool: &PgPool,
        tryout_id: EntityId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE tryout_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(tryout_id.as_uuid())
            .fetch_all(pool)
            .await
    }

    /// Find a question by ID within a tryout.
    pub async fn find_scoped(
        pool: &PgPool,
        tryout_id: EntityId,
        id: EntityId,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1 AND tryout_id = $2");
        sqlx::query_as::<_, Question>(&query)
            .bind(id.as_uuid())
            .bind(tryout_id.as_uuid())
            .fetch_optional(pool)
            .await
    }

    /// Replace the text and truth value of a question within a tryout.
    ///
    /// Returns `None` if no matching row exists.
    pub async fn update_scoped(
        pool: &PgPool,
        tryout_id: EntityId,
        id: EntityId,
        input: &QuestionInput,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET
                text = $3,
                is_true = $4,
                updated_at = GREATEST(NOW(), created_at)
             WHERE id = $1 AND tryout_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id.as_uuid())
            .bind(tryout_id.as_uuid())
            .bind(&input.text)
            .bind(input.is_true)
            .fetch_optional(pool)
            .await
    }

    /// Delete a question within a tryout. Returns `true` if a row was removed.
    pub async fn delete_scoped(
        pool: &PgPool,
        tryout_id: EntityId,
        id: EntityId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1 AND tryout_id = $2")
            .bind(id.as_uuid())
            .bind(tryout_id.as_uuid())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every question of a tryout. Returns the number of rows removed.
    pub async fn delete_by_tryout(pool: &PgPool, tryout_id: EntityId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE tryout_id = $1")
            .bind(tryout_id.as_uuid())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
