//! The [`EntityStore`] abstraction over the tryout and question collections.
//!
//! Components receive the store as an `Arc<dyn EntityStore>` at construction
//! time. Two implementations exist:
//! - [`PgStore`]: PostgreSQL via the repositories, every call time-bounded
//! - [`MemoryStore`]: process-local maps, used by tests and local demos

use std::time::Duration;

use async_trait::async_trait;
use tryout_core::filter::TryoutFilter;
use tryout_core::types::EntityId;

use crate::models::question::{Question, QuestionInput};
use crate::models::tryout::{Tryout, TryoutInput};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{PgStore, DEFAULT_STORE_TIMEOUT};

/// Infrastructure failure while talking to the store.
///
/// Absence of a record is not an error at this level: lookups return
/// `Option` and deletes return `bool`, leaving `NotFound` to the caller.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable during {operation}: {source}")]
    Unavailable {
        operation: &'static str,
        entity_id: Option<EntityId>,
        #[source]
        source: sqlx::Error,
    },

    #[error("store call {operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        entity_id: Option<EntityId>,
        after: Duration,
    },
}

impl StoreError {
    pub fn operation(&self) -> &'static str {
        match self {
            StoreError::Unavailable { operation, .. } | StoreError::Timeout { operation, .. } => {
                operation
            }
        }
    }

    pub fn entity_id(&self) -> Option<EntityId> {
        match self {
            StoreError::Unavailable { entity_id, .. } | StoreError::Timeout { entity_id, .. } => {
                *entity_id
            }
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed storage for tryouts and their questions.
///
/// Writes never check the submission lock; that is the job of
/// [`crate::guard::ConsistencyGuard`], which callers consult first.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Cheap reachability probe.
    async fn ping(&self) -> StoreResult<()>;

    // -- Tryouts --------------------------------------------------------------

    /// Assign an id and timestamps, persist, and return the stored tryout.
    async fn create_tryout(&self, input: &TryoutInput) -> StoreResult<Tryout>;

    async fn get_tryout(&self, id: EntityId) -> StoreResult<Option<Tryout>>;

    /// All tryouts in store-native order.
    async fn list_tryouts(&self) -> StoreResult<Vec<Tryout>>;

    /// Replace title, description, category and duration; refresh `updated_at`.
    async fn update_tryout(&self, id: EntityId, input: &TryoutInput)
        -> StoreResult<Option<Tryout>>;

    /// Remove a tryout. Its questions are not touched.
    async fn delete_tryout(&self, id: EntityId) -> StoreResult<bool>;

    /// Set or clear the submission lock. The only write path for the flag.
    async fn set_submission_lock(&self, id: EntityId, locked: bool)
        -> StoreResult<Option<Tryout>>;

    async fn count_tryouts(&self) -> StoreResult<i64>;

    /// Distinct category values across all tryouts, sorted ascending.
    async fn distinct_categories(&self) -> StoreResult<Vec<String>>;

    /// Tryouts satisfying every predicate in `filter`.
    async fn filter_tryouts(&self, filter: &TryoutFilter) -> StoreResult<Vec<Tryout>>;

    // -- Questions ------------------------------------------------------------

    async fn create_question(
        &self,
        tryout_id: EntityId,
        input: &QuestionInput,
    ) -> StoreResult<Question>;

    /// Questions referencing `tryout_id`. Unknown tryouts yield an empty list.
    async fn list_questions_by_tryout(&self, tryout_id: EntityId) -> StoreResult<Vec<Question>>;

    /// Both ids must match for the question to be returned.
    async fn get_question(
        &self,
        tryout_id: EntityId,
        question_id: EntityId,
    ) -> StoreResult<Option<Question>>;

    async fn update_question(
        &self,
        tryout_id: EntityId,
        question_id: EntityId,
        input: &QuestionInput,
    ) -> StoreResult<Option<Question>>;

    async fn delete_question(&self, tryout_id: EntityId, question_id: EntityId)
        -> StoreResult<bool>;

    /// Remove every question of a tryout, returning how many were removed.
    async fn delete_questions_by_tryout(&self, tryout_id: EntityId) -> StoreResult<u64>;
}
