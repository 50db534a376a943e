//! Request extractors that validate before a handler runs.
//!
//! Malformed bodies and bad ids are turned into structured
//! [`AppError`] responses here, so no store call or lock check happens for
//! input that can never succeed.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use tryout_core::error::CoreError;
use tryout_core::types::EntityId;
use tryout_core::validation::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs the payload's [`Validate`] rules.
///
/// Syntax errors, missing fields, wrong types and rule violations all map
/// to `VALIDATION_ERROR` (400).
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                CoreError::Validation(format!("Invalid input data: {}", rejection.body_text()))
            })?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Parse a path segment into an [`EntityId`].
///
/// `entity` names the id in the error message (`"tryout"`, `"question"`).
pub fn parse_id(entity: &str, raw: &str) -> Result<EntityId, AppError> {
    EntityId::parse(raw)
        .map_err(|_| CoreError::InvalidIdentifier(format!("Invalid {entity} ID format")).into())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_id_accepts_hex_and_names_entity_on_failure() {
        let id = EntityId::generate();
        assert_eq!(parse_id("tryout", &id.to_hex()).unwrap(), id);

        let err = parse_id("question", "123").unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::InvalidIdentifier(msg)) if msg == "Invalid question ID format"
        );
    }
}
