//! Submission-lock rule for question mutations.
//!
//! Once a tryout has received a submission its question set is frozen.
//! Tryout-level fields stay editable and the tryout itself stays deletable;
//! only question create/update/delete is gated.

use crate::error::CoreError;

/// Reason reported when a question mutation is refused.
pub const LOCKED_REASON: &str = "tryout has submissions";

/// Outcome of evaluating the submission lock for a question mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationDecision {
    Allowed,
    Denied(&'static str),
}

/// The kind of question mutation being authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionMutation {
    Create,
    Update,
    Delete,
}

impl QuestionMutation {
    /// Client-facing message for a refused mutation of this kind.
    pub fn locked_message(self) -> &'static str {
        match self {
            QuestionMutation::Create => "Cannot add questions to a tryout that has submissions",
            QuestionMutation::Update => {
                "Cannot modify questions of a tryout that has submissions"
            }
            QuestionMutation::Delete => {
                "Cannot delete questions of a tryout that has submissions"
            }
        }
    }
}

/// Decide whether a question of a tryout may be mutated.
pub fn decide(has_submission: bool) -> MutationDecision {
    if has_submission {
        MutationDecision::Denied(LOCKED_REASON)
    } else {
        MutationDecision::Allowed
    }
}

impl MutationDecision {
    /// Convert a denial into [`CoreError::Locked`] for the given mutation.
    pub fn into_result(self, mutation: QuestionMutation) -> Result<(), CoreError> {
        match self {
            MutationDecision::Allowed => Ok(()),
            MutationDecision::Denied(_) => {
                Err(CoreError::Locked(mutation.locked_message().to_string()))
            }
        }
    }
}
