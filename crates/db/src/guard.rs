//! Consistency guard for question mutations.
//!
//! The guard re-reads the owning tryout on every call; the lock flag is set
//! by an external actor and may change between requests, so nothing is
//! cached.
//!
//! The read and the subsequent question write are two separate store calls.
//! A lock set between them is not observed by that write. This window is
//! accepted: writes are rare and no multi-statement transaction is used.

use std::sync::Arc;

use tryout_core::error::CoreError;
use tryout_core::lock::{decide, MutationDecision, QuestionMutation};
use tryout_core::types::EntityId;

use crate::store::{EntityStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// The owning tryout is missing, or the mutation was denied.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Single authority on whether a question of a tryout may be mutated.
#[derive(Clone)]
pub struct ConsistencyGuard {
    store: Arc<dyn EntityStore>,
}

impl ConsistencyGuard {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Evaluate the submission lock of `tryout_id`.
    ///
    /// A missing tryout is reported as [`CoreError::NotFound`], never as a
    /// denial.
    pub async fn authorize_question_mutation(
        &self,
        tryout_id: EntityId,
    ) -> Result<MutationDecision, GuardError> {
        let tryout = self
            .store
            .get_tryout(tryout_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Tryout", tryout_id))?;
        Ok(decide(tryout.has_submission))
    }

    /// Like [`Self::authorize_question_mutation`], turning a denial into
    /// [`CoreError::Locked`].
    pub async fn ensure_question_mutation_allowed(
        &self,
        tryout_id: EntityId,
        mutation: QuestionMutation,
    ) -> Result<(), GuardError> {
        let decision = self.authorize_question_mutation(tryout_id).await?;
        if let MutationDecision::Denied(reason) = decision {
            tracing::debug!(%tryout_id, ?mutation, reason, "Question mutation denied");
        }
        decision.into_result(mutation).map_err(GuardError::from)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use tryout_core::lock::LOCKED_REASON;

    use super::*;
    use crate::models::tryout::TryoutInput;
    use crate::store::MemoryStore;

    async fn setup() -> (Arc<MemoryStore>, ConsistencyGuard, EntityId) {
        let store = Arc::new(MemoryStore::new());
        let tryout = store
            .create_tryout(&TryoutInput {
                title: "Quiz".into(),
                description: "D".into(),
                category: "Math".into(),
                duration: 10,
            })
            .await
            .unwrap();
        let guard = ConsistencyGuard::new(store.clone());
        (store, guard, tryout.id)
    }

    #[tokio::test]
    async fn unlocked_tryout_is_allowed() {
        let (_store, guard, id) = setup().await;
        assert_eq!(
            guard.authorize_question_mutation(id).await.unwrap(),
            MutationDecision::Allowed
        );
    }

    #[tokio::test]
    async fn locked_tryout_is_denied() {
        let (store, guard, id) = setup().await;
        store.set_submission_lock(id, true).await.unwrap();
        assert_eq!(
            guard.authorize_question_mutation(id).await.unwrap(),
            MutationDecision::Denied(LOCKED_REASON)
        );
        assert_matches!(
            guard
                .ensure_question_mutation_allowed(id, QuestionMutation::Delete)
                .await,
            Err(GuardError::Core(CoreError::Locked(_)))
        );
    }

    #[tokio::test]
    async fn missing_tryout_is_not_found_not_denied() {
        let (_store, guard, _id) = setup().await;
        assert_matches!(
            guard.authorize_question_mutation(EntityId::generate()).await,
            Err(GuardError::Core(CoreError::NotFound { entity: "Tryout", .. }))
        );
    }

    #[tokio::test]
    async fn lock_changes_are_seen_without_caching() {
        let (store, guard, id) = setup().await;
        assert!(guard
            .ensure_question_mutation_allowed(id, QuestionMutation::Create)
            .await
            .is_ok());

        store.set_submission_lock(id, true).await.unwrap();
        assert!(guard
            .ensure_question_mutation_allowed(id, QuestionMutation::Create)
            .await
            .is_err());

        store.set_submission_lock(id, false).await.unwrap();
        assert!(guard
            .ensure_question_mutation_allowed(id, QuestionMutation::Create)
            .await
            .is_ok());
    }
}
