//! Repository for the `tryouts` table.

use sqlx::PgPool;
use tryout_core::filter::TryoutFilter;
use tryout_core::types::EntityId;

use crate::models::tryout::{Tryout, TryoutInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, category, duration, has_submission, created_at, updated_at";

/// Provides CRUD, filtering and aggregation over tryouts.
pub struct TryoutRepo;

impl TryoutRepo {
    /// Insert a new tryout, returning the created row.
    ///
    /// `created_at` and `updated_at` share the same `NOW()` value and the
    /// submission lock starts cleared.
    pub async fn create(
        pool: &PgPool,
        id: EntityId,
        input: &TryoutInput,
    ) -> Result<Tryout, sqlx::Error> {
        let query = format!(
            "INSERT INTO tryouts (id, title, description, category, duration)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tryout>(&query)
            .bind(id.as_uuid())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.duration)
            .fetch_one(pool)
            .await
    }

    /// Find a tryout by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Tryout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tryouts WHERE id = $1");
        sqlx::query_as::<_, Tryout>(&query)
            .bind(id.as_uuid())
            .fetch_optional(pool)
            .await
    }

    /// List all tryouts ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tryout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tryouts ORDER BY created_at DESC");
        sqlx::query_as::<_, Tryout>(&query).fetch_all(pool).await
    }

    /// List tryouts matching every predicate present in `filter`.
    pub async fn filter(pool: &PgPool, filter: &TryoutFilter) -> Result<Vec<Tryout>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tryouts
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND ($2::INTEGER IS NULL OR duration >= $2)
               AND ($3::INTEGER IS NULL OR duration <= $3)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Tryout>(&query)
            .bind(&filter.category)
            .bind(filter.min_duration)
            .bind(filter.max_duration)
            .fetch_all(pool)
            .await
    }

    /// Replace the mutable fields of a tryout. The submission lock is untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &TryoutInput,
    ) -> Result<Option<Tryout>, sqlx::Error> {
        let query = format!(
            "UPDATE tryouts SET
                title = $2,
                description = $3,
                category = $4,
                duration = $5,
                updated_at = GREATEST(NOW(), created_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tryout>(&query)
            .bind(id.as_uuid())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.duration)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the submission lock.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_submission_lock(
        pool: &PgPool,
        id: EntityId,
        locked: bool,
    ) -> Result<Option<Tryout>, sqlx::Error> {
        let query = format!(
            "UPDATE tryouts SET
                has_submission = $2,
                updated_at = GREATEST(NOW(), created_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tryout>(&query)
            .bind(id.as_uuid())
            .bind(locked)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a tryout by ID. Returns `true` if a row was removed.
    ///
    /// Questions referencing the tryout are left in place.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tryouts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all tryouts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tryouts")
            .fetch_one(pool)
            .await
    }

    /// Distinct category values, sorted ascending.
    pub async fn distinct_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT category FROM tryouts ORDER BY category")
            .fetch_all(pool)
            .await
    }
}
