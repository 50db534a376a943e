//! Tryout entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use tryout_core::error::CoreError;
use tryout_core::types::{EntityId, Timestamp};
use tryout_core::validation::{validate_duration, validate_required_text, Validate};
use uuid::Uuid;

/// A tryout row from the `tryouts` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Tryout {
    #[sqlx(try_from = "Uuid")]
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Length of the tryout in minutes.
    pub duration: i32,
    /// Submission lock. Set externally; never flipped by tryout updates.
    pub has_submission: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a tryout or replacing its mutable fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TryoutInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: i32,
}

impl Validate for TryoutInput {
    fn validate(&self) -> Result<(), CoreError> {
        validate_required_text("title", &self.title)?;
        validate_required_text("description", &self.description)?;
        validate_required_text("category", &self.category)?;
        validate_duration(self.duration)
    }
}
