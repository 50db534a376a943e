//! `PgStore` against a live PostgreSQL instance.
//!
//! These need `DATABASE_URL` pointing at a server where `sqlx::test` may
//! create scratch databases. Run with `cargo test -- --ignored`.

use std::time::Duration;

use sqlx::PgPool;
use tryout_core::filter::TryoutFilter;
use tryout_core::types::EntityId;
use tryout_db::models::question::QuestionInput;
use tryout_db::models::tryout::TryoutInput;
use tryout_db::{EntityStore, PgStore};

fn store(pool: PgPool) -> PgStore {
    PgStore::new(pool, Duration::from_secs(10))
}

fn tryout_input(category: &str, duration: i32) -> TryoutInput {
    TryoutInput {
        title: format!("{category} quiz"),
        description: "Sample".into(),
        category: category.into(),
        duration,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_tryout_round_trip(pool: PgPool) {
    let store = store(pool);
    let created = store.create_tryout(&tryout_input("Math", 10)).await.unwrap();
    assert!(!created.has_submission);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = store.get_tryout(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_does_not_touch_lock(pool: PgPool) {
    let store = store(pool);
    let created = store.create_tryout(&tryout_input("Math", 10)).await.unwrap();
    store.set_submission_lock(created.id, true).await.unwrap();

    let updated = store
        .update_tryout(created.id, &tryout_input("Science", 25))
        .await
        .unwrap()
        .unwrap();
    assert!(updated.has_submission);
    assert_eq!(updated.category, "Science");
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_distinct_categories_and_filter(pool: PgPool) {
    let store = store(pool);
    for (category, duration) in [("Math", 30), ("Math", 90), ("Science", 30)] {
        store
            .create_tryout(&tryout_input(category, duration))
            .await
            .unwrap();
    }

    assert_eq!(
        store.distinct_categories().await.unwrap(),
        vec!["Math".to_string(), "Science".to_string()]
    );

    let filter = TryoutFilter {
        category: Some("Math".into()),
        min_duration: Some(60),
        max_duration: None,
    };
    let found = store.filter_tryouts(&filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].duration, 90);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_question_scoped_to_tryout(pool: PgPool) {
    let store = store(pool);
    let a = store.create_tryout(&tryout_input("Math", 10)).await.unwrap();
    let b = store.create_tryout(&tryout_input("Science", 10)).await.unwrap();
    let question = store
        .create_question(
            a.id,
            &QuestionInput {
                text: "2+2=4".into(),
                is_true: true,
            },
        )
        .await
        .unwrap();

    assert!(store.get_question(b.id, question.id).await.unwrap().is_none());
    assert!(store.get_question(a.id, question.id).await.unwrap().is_some());
    assert!(!store.delete_question(b.id, question.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_tryout_is_not_cascading(pool: PgPool) {
    let store = store(pool);
    let tryout = store.create_tryout(&tryout_input("Math", 10)).await.unwrap();
    store
        .create_question(
            tryout.id,
            &QuestionInput {
                text: "Orphan me".into(),
                is_true: false,
            },
        )
        .await
        .unwrap();

    assert!(store.delete_tryout(tryout.id).await.unwrap());
    assert!(!store.delete_tryout(tryout.id).await.unwrap());
    assert_eq!(
        store.list_questions_by_tryout(tryout.id).await.unwrap().len(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_missing_ids_return_none(pool: PgPool) {
    let store = store(pool);
    let id = EntityId::generate();
    assert!(store.get_tryout(id).await.unwrap().is_none());
    assert!(store
        .update_tryout(id, &tryout_input("Math", 10))
        .await
        .unwrap()
        .is_none());
    assert!(store.set_submission_lock(id, true).await.unwrap().is_none());
}
