//! Question entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use tryout_core::error::CoreError;
use tryout_core::types::{EntityId, Timestamp};
use tryout_core::validation::{validate_required_text, Validate};
use uuid::Uuid;

/// A question row from the `questions` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Question {
    #[sqlx(try_from = "Uuid")]
    pub id: EntityId,
    /// Owning tryout. A reference only; not enforced after creation.
    #[sqlx(try_from = "Uuid")]
    pub tryout_id: EntityId,
    pub text: String,
    pub is_true: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a question or replacing its mutable fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    pub text: String,
    /// Defaults to `false` when omitted.
    #[serde(default)]
    pub is_true: bool,
}

impl Validate for QuestionInput {
    fn validate(&self) -> Result<(), CoreError> {
        validate_required_text("text", &self.text)
    }
}
