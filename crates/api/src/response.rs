//! Response payloads.
//!
//! Store rows are never serialized directly. Each payload is built from a
//! row here, with ids rendered as hex strings and camelCase field names.

use serde::Serialize;
use tryout_core::types::Timestamp;
use tryout_db::models::question::Question;
use tryout_db::models::tryout::Tryout;

/// Public shape of a tryout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TryoutResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: i32,
    pub has_submission: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Tryout> for TryoutResponse {
    fn from(t: Tryout) -> Self {
        Self {
            id: t.id.to_hex(),
            title: t.title,
            description: t.description,
            category: t.category,
            duration: t.duration,
            has_submission: t.has_submission,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Public shape of a question.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub tryout_id: String,
    pub text: String,
    pub is_true: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id.to_hex(),
            tryout_id: q.tryout_id.to_hex(),
            text: q.text,
            is_true: q.is_true,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}

/// One selectable category: `{ "category": "Math" }`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub category: String,
}

/// `{ "categories": [{ "category": ... }, ...] }` returned by the filter
/// options endpoint.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryOption>,
}

impl From<Vec<String>> for CategoriesResponse {
    fn from(categories: Vec<String>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .map(|category| CategoryOption { category })
                .collect(),
        }
    }
}

/// `{ "message": "..." }` returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Map a list of rows into their response payloads.
pub fn map_all<R, P: From<R>>(rows: Vec<R>) -> Vec<P> {
    rows.into_iter().map(P::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_wrap_each_value() {
        let response = CategoriesResponse::from(vec!["Math".to_string(), "Science".to_string()]);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "categories": [{ "category": "Math" }, { "category": "Science" }] })
        );
    }
}
