use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tryout_core::filter::TryoutFilter;
use tryout_core::types::EntityId;

use super::{EntityStore, StoreError, StoreResult};
use crate::models::question::{Question, QuestionInput};
use crate::models::tryout::{Tryout, TryoutInput};
use crate::repositories::{QuestionRepo, TryoutRepo};
use crate::DbPool;

/// Default bound on a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(20);

/// PostgreSQL-backed [`EntityStore`].
///
/// Every call is wrapped in `tokio::time::timeout`; an expired call surfaces
/// as [`StoreError::Timeout`] and is not retried.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
    timeout: Duration,
}

impl PgStore {
    pub fn new(pool: DbPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Close the underlying pool, waiting for checked-out connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn bounded<T, F>(
        &self,
        operation: &'static str,
        entity_id: Option<EntityId>,
        fut: F,
    ) -> StoreResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(StoreError::Unavailable {
                operation,
                entity_id,
                source,
            }),
            Err(_) => Err(StoreError::Timeout {
                operation,
                entity_id,
                after: self.timeout,
            }),
        }
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        self.bounded("ping", None, crate::health_check(&self.pool))
            .await
    }

    async fn create_tryout(&self, input: &TryoutInput) -> StoreResult<Tryout> {
        let id = EntityId::generate();
        self.bounded(
            "create_tryout",
            Some(id),
            TryoutRepo::create(&self.pool, id, input),
        )
        .await
    }

    async fn get_tryout(&self, id: EntityId) -> StoreResult<Option<Tryout>> {
        self.bounded("get_tryout", Some(id), TryoutRepo::find_by_id(&self.pool, id))
            .await
    }

    async fn list_tryouts(&self) -> StoreResult<Vec<Tryout>> {
        self.bounded("list_tryouts", None, TryoutRepo::list(&self.pool))
            .await
    }

    async fn update_tryout(
        &self,
        id: EntityId,
        input: &TryoutInput,
    ) -> StoreResult<Option<Tryout>> {
        self.bounded(
            "update_tryout",
            Some(id),
            TryoutRepo::update(&self.pool, id, input),
        )
        .await
    }

    async fn delete_tryout(&self, id: EntityId) -> StoreResult<bool> {
        self.bounded("delete_tryout", Some(id), TryoutRepo::delete(&self.pool, id))
            .await
    }

    async fn set_submission_lock(
        &self,
        id: EntityId,
        locked: bool,
    ) -> StoreResult<Option<Tryout>> {
        self.bounded(
            "set_submission_lock",
            Some(id),
            TryoutRepo::set_submission_lock(&self.pool, id, locked),
        )
        .await
    }

    async fn count_tryouts(&self) -> StoreResult<i64> {
        self.bounded("count_tryouts", None, TryoutRepo::count(&self.pool))
            .await
    }

    async fn distinct_categories(&self) -> StoreResult<Vec<String>> {
        self.bounded(
            "distinct_categories",
            None,
            TryoutRepo::distinct_categories(&self.pool),
        )
        .await
    }

    async fn filter_tryouts(&self, filter: &TryoutFilter) -> StoreResult<Vec<Tryout>> {
        self.bounded("filter_tryouts", None, TryoutRepo::filter(&self.pool, filter))
            .await
    }

    async fn create_question(
        &self,
        tryout_id: EntityId,
        input: &QuestionInput,
    ) -> StoreResult<Question> {
        let id = EntityId::generate();
        self.bounded(
            "create_question",
            Some(tryout_id),
            QuestionRepo::create(&self.pool, id, tryout_id, input),
        )
        .await
    }

    async fn list_questions_by_tryout(&self, tryout_id: EntityId) -> StoreResult<Vec<Question>> {
        self.bounded(
            "list_questions_by_tryout",
            Some(tryout_id),
            QuestionRepo::list_by_tryout(&self.pool, tryout_id),
        )
        .await
    }

    async fn get_question(
        &self,
        tryout_id: EntityId,
        question_id: EntityId,
    ) -> StoreResult<Option<Question>> {
        self.bounded(
            "get_question",
            Some(question_id),
            QuestionRepo::find_scoped(&self.pool, tryout_id, question_id),
        )
        .await
    }

    async fn update_question(
        &self,
        tryout_id: EntityId,
        question_id: EntityId,
        input: &QuestionInput,
    ) -> StoreResult<Option<Question>> {
        self.bounded(
            "update_question",
            Some(question_id),
            QuestionRepo::update_scoped(&self.pool, tryout_id, question_id, input),
        )
        .await
    }

    async fn delete_question(
        &self,
        tryout_id: EntityId,
        question_id: EntityId,
    ) -> StoreResult<bool> {
        self.bounded(
            "delete_question",
            Some(question_id),
            QuestionRepo::delete_scoped(&self.pool, tryout_id, question_id),
        )
        .await
    }

    async fn delete_questions_by_tryout(&self, tryout_id: EntityId) -> StoreResult<u64> {
        self.bounded(
            "delete_questions_by_tryout",
            Some(tryout_id),
            QuestionRepo::delete_by_tryout(&self.pool, tryout_id),
        )
        .await
    }
}
