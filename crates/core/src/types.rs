//! Shared identifier and timestamp types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::CoreError;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Opaque store-generated identifier for tryouts and questions.
///
/// Backed by a UUIDv7 so ids sort roughly by creation time. At the HTTP
/// boundary it is always rendered as 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parse an identifier from its boundary representation.
    ///
    /// Accepts the 32-char hex form as well as hyphenated UUID text.
    /// Anything else is a [`CoreError::InvalidIdentifier`].
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidIdentifier(format!("'{raw}' is not a valid id"));
        let text = raw.trim();
        // Only simple (32) and hyphenated (36) forms; no urn or braced ids.
        if !matches!(text.len(), 32 | 36) {
            return Err(invalid());
        }
        Uuid::try_parse(text).map(Self).map_err(|_| invalid())
    }

    /// Hex rendering used in every response payload.
    pub fn to_hex(&self) -> String {
        self.0.simple().to_string()
    }
}

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for EntityId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn hex_rendering_has_no_hyphens() {
        let id = EntityId::generate();
        let hex = id.to_hex();
        assert_eq!(hex.len(), 32);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id.to_string(), hex);
    }

    #[test]
    fn parses_its_own_hex_form() {
        let id = EntityId::generate();
        assert_eq!(EntityId::parse(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn parses_hyphenated_form() {
        let id = EntityId::generate();
        let hyphenated = id.as_uuid().hyphenated().to_string();
        assert_eq!(EntityId::parse(&hyphenated).unwrap(), id);
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "abc", "not-a-valid-id", "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"] {
            assert_matches!(EntityId::parse(raw), Err(CoreError::InvalidIdentifier(_)));
        }
    }

    #[test]
    fn rejects_urn_and_braced_forms() {
        let uuid = EntityId::generate().as_uuid();
        let urn = uuid.urn().to_string();
        let braced = uuid.braced().to_string();
        assert_matches!(EntityId::parse(&urn), Err(CoreError::InvalidIdentifier(_)));
        assert_matches!(EntityId::parse(&braced), Err(CoreError::InvalidIdentifier(_)));
    }

    #[test]
    fn serializes_as_hex_string() {
        let id = EntityId::generate();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_hex()));
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(EntityId::generate(), EntityId::generate());
    }
}
