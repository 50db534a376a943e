use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tryout_core::filter::{distinct_categories, TryoutFilter};
use tryout_core::types::{EntityId, Timestamp};

use super::{EntityStore, StoreResult};
use crate::models::question::{Question, QuestionInput};
use crate::models::tryout::{Tryout, TryoutInput};

#[derive(Default)]
struct Collections {
    tryouts: Vec<Tryout>,
    questions: Vec<Question>,
}

/// In-memory [`EntityStore`] for tests and local runs without a database.
///
/// Records are kept in insertion order, which is the order `list_tryouts`
/// and `list_questions_by_tryout` report. Calls never fail.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A fresh `updated_at` that never precedes `created_at`, even if the wall
/// clock stepped backwards.
fn touched(created_at: Timestamp) -> Timestamp {
    Utc::now().max(created_at)
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_tryout(&self, input: &TryoutInput) -> StoreResult<Tryout> {
        let now = Utc::now();
        let tryout = Tryout {
            id: EntityId::generate(),
            title: input.title.clone(),
            description: input.description.clone(),
            category: input.category.clone(),
            duration: input.duration,
            has_submission: false,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().await.tryouts.push(tryout.clone());
        Ok(tryout)
    }

    async fn get_tryout(&self, id: EntityId) -> StoreResult<Option<Tryout>> {
        let guard = self.inner.read().await;
        Ok(guard.tryouts.iter().find(|t| t.id == id).cloned())
    }

    async fn list_tryouts(&self) -> StoreResult<Vec<Tryout>> {
        Ok(self.inner.read().await.tryouts.clone())
    }

    async fn update_tryout(
        &self,
        id: EntityId,
        input: &TryoutInput,
    ) -> StoreResult<Option<Tryout>> {
        let mut guard = self.inner.write().await;
        let Some(tryout) = guard.tryouts.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        tryout.title = input.title.clone();
        tryout.description = input.description.clone();
        tryout.category = input.category.clone();
        tryout.duration = input.duration;
        tryout.updated_at = touched(tryout.created_at);
        Ok(Some(tryout.clone()))
    }

    async fn delete_tryout(&self, id: EntityId) -> StoreResult<bool> {
        let mut guard = self.inner.write().await;
        let before = guard.tryouts.len();
        guard.tryouts.retain(|t| t.id != id);
        Ok(guard.tryouts.len() < before)
    }

    async fn set_submission_lock(
        &self,
        id: EntityId,
        locked: bool,
    ) -> StoreResult<Option<Tryout>> {
        let mut guard = self.inner.write().await;
        let Some(tryout) = guard.tryouts.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        tryout.has_submission = locked;
        tryout.updated_at = touched(tryout.created_at);
        Ok(Some(tryout.clone()))
    }

    async fn count_tryouts(&self) -> StoreResult<i64> {
        let count = self.inner.read().await.tryouts.len();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn distinct_categories(&self) -> StoreResult<Vec<String>> {
        let guard = self.inner.read().await;
        Ok(distinct_categories(
            guard.tryouts.iter().map(|t| t.category.as_str()),
        ))
    }

    async fn filter_tryouts(&self, filter: &TryoutFilter) -> StoreResult<Vec<Tryout>> {
        let guard = self.inner.read().await;
        Ok(guard
            .tryouts
            .iter()
            .filter(|t| filter.matches(&t.category, t.duration))
            .cloned()
            .collect())
    }

    async fn create_question(
        &self,
        tryout_id: EntityId,
        input: &QuestionInput,
    ) -> StoreResult<Question> {
        let now = Utc::now();
        let question = Question {
            id: EntityId::generate(),
            tryout_id,
            text: input.text.clone(),
            is_true: input.is_true,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().await.questions.push(question.clone());
        Ok(question)
    }

    async fn list_questions_by_tryout(&self, tryout_id: EntityId) -> StoreResult<Vec<Question>> {
        let guard = self.inner.read().await;
        Ok(guard
            .questions
            .iter()
            .filter(|q| q.tryout_id == tryout_id)
            .cloned()
            .collect())
    }

    async fn get_question(
        &self,
        tryout_id: EntityId,
        question_id: EntityId,
    ) -> StoreResult<Option<Question>> {
        let guard = self.inner.read().await;
        Ok(guard
            .questions
            .iter()
            .find(|q| q.id == question_id && q.tryout_id == tryout_id)
            .cloned())
    }

    async fn update_question(
        &self,
        tryout_id: EntityId,
        question_id: EntityId,
        input: &QuestionInput,
    ) -> StoreResult<Option<Question>> {
        let mut guard = self.inner.write().await;
        let Some(question) = guard
            .questions
            .iter_mut()
            .find(|q| q.id == question_id && q.tryout_id == tryout_id)
        else {
            return Ok(None);
        };
        question.text = input.text.clone();
        question.is_true = input.is_true;
        question.updated_at = touched(question.created_at);
        Ok(Some(question.clone()))
    }

    async fn delete_question(
        &self,
        tryout_id: EntityId,
        question_id: EntityId,
    ) -> StoreResult<bool> {
        let mut guard = self.inner.write().await;
        let before = guard.questions.len();
        guard
            .questions
            .retain(|q| !(q.id == question_id && q.tryout_id == tryout_id));
        Ok(guard.questions.len() < before)
    }

    async fn delete_questions_by_tryout(&self, tryout_id: EntityId) -> StoreResult<u64> {
        let mut guard = self.inner.write().await;
        let before = guard.questions.len();
        guard.questions.retain(|q| q.tryout_id != tryout_id);
        Ok((before - guard.questions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tryout_input(category: &str, duration: i32) -> TryoutInput {
        TryoutInput {
            title: format!("{category} quiz"),
            description: "Sample".into(),
            category: category.into(),
            duration,
        }
    }

    fn question_input(text: &str, is_true: bool) -> QuestionInput {
        QuestionInput {
            text: text.into(),
            is_true,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = MemoryStore::new();
        let input = tryout_input("Math", 10);
        let created = store.create_tryout(&input).await.unwrap();

        let fetched = store.get_tryout(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, input.title);
        assert_eq!(fetched.duration, 10);
        assert!(!fetched.has_submission);
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn update_keeps_lock_and_refreshes_timestamp() {
        let store = MemoryStore::new();
        let created = store.create_tryout(&tryout_input("Math", 10)).await.unwrap();
        store.set_submission_lock(created.id, true).await.unwrap();

        let updated = store
            .update_tryout(created.id, &tryout_input("Science", 20))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.category, "Science");
        assert_eq!(updated.duration, 20);
        assert!(updated.has_submission);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn update_missing_tryout_returns_none() {
        let store = MemoryStore::new();
        let missing = store
            .update_tryout(EntityId::generate(), &tryout_input("Math", 10))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn delete_twice_reports_absence_second_time() {
        let store = MemoryStore::new();
        let created = store.create_tryout(&tryout_input("Math", 10)).await.unwrap();
        assert!(store.delete_tryout(created.id).await.unwrap());
        assert!(!store.delete_tryout(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn delete_tryout_leaves_questions_orphaned() {
        let store = MemoryStore::new();
        let tryout = store.create_tryout(&tryout_input("Math", 10)).await.unwrap();
        store
            .create_question(tryout.id, &question_input("2+2=4", true))
            .await
            .unwrap();

        store.delete_tryout(tryout.id).await.unwrap();
        let orphans = store.list_questions_by_tryout(tryout.id).await.unwrap();
        assert_eq!(orphans.len(), 1);

        assert_eq!(store.delete_questions_by_tryout(tryout.id).await.unwrap(), 1);
        assert!(store.list_questions_by_tryout(tryout.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn distinct_categories_collapses_duplicates() {
        let store = MemoryStore::new();
        for category in ["Math", "Math", "Science"] {
            store.create_tryout(&tryout_input(category, 10)).await.unwrap();
        }
        assert_eq!(
            store.distinct_categories().await.unwrap(),
            vec!["Math".to_string(), "Science".to_string()]
        );
    }

    #[tokio::test]
    async fn distinct_categories_empty_store() {
        let store = MemoryStore::new();
        assert!(store.distinct_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn filter_combines_predicates() {
        let store = MemoryStore::new();
        store.create_tryout(&tryout_input("Math", 30)).await.unwrap();
        store.create_tryout(&tryout_input("Math", 90)).await.unwrap();
        store.create_tryout(&tryout_input("Science", 30)).await.unwrap();

        let filter = TryoutFilter {
            category: Some("Math".into()),
            min_duration: None,
            max_duration: Some(60),
        };
        let found = store.filter_tryouts(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Math");
        assert_eq!(found[0].duration, 30);

        let everything = store.filter_tryouts(&TryoutFilter::default()).await.unwrap();
        assert_eq!(everything, store.list_tryouts().await.unwrap());
    }

    #[tokio::test]
    async fn question_lookup_requires_matching_tryout() {
        let store = MemoryStore::new();
        let a = store.create_tryout(&tryout_input("Math", 10)).await.unwrap();
        let b = store.create_tryout(&tryout_input("Science", 10)).await.unwrap();
        let question = store
            .create_question(a.id, &question_input("2+2=4", true))
            .await
            .unwrap();

        assert!(store.get_question(b.id, question.id).await.unwrap().is_none());
        assert!(store
            .update_question(b.id, question.id, &question_input("changed", false))
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete_question(b.id, question.id).await.unwrap());

        let still_there = store.get_question(a.id, question.id).await.unwrap().unwrap();
        assert_eq!(still_there.text, "2+2=4");
    }

    #[tokio::test]
    async fn count_tracks_inserts() {
        let store = MemoryStore::new();
        assert_eq!(store.count_tryouts().await.unwrap(), 0);
        store.create_tryout(&tryout_input("Math", 10)).await.unwrap();
        assert_eq!(store.count_tryouts().await.unwrap(), 1);
    }
}
