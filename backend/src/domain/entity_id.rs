//! Opaque entity identifiers.
//!
//! Pets and users are addressed by UUIDs. [`EntityId`] is the only form in
//! which an identifier crosses into the domain: raw path segments are parsed
//! here and rejected if they do not match the UUID grammar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reasons an identifier string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdError {
    #[error("identifier must not be empty")]
    Empty,
    #[error("identifier must be a valid UUID")]
    Malformed,
}

/// Canonical identifier of a pet or user.
///
/// # Examples
/// ```
/// use petdex::domain::EntityId;
///
/// let id = EntityId::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(EntityId::parse("not-a-valid-id").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(Uuid);

impl EntityId {
    /// Parse a raw identifier.
    ///
    /// Surrounding whitespace is not trimmed; `" <uuid>"` is malformed.
    pub fn parse(raw: &str) -> Result<Self, EntityIdError> {
        if raw.is_empty() {
            return Err(EntityIdError::Empty);
        }
        if raw.trim() != raw {
            return Err(EntityIdError::Malformed);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| EntityIdError::Malformed)
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Always the lowercase hyphenated form, whatever the input spelling.
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EntityId {
    type Err = EntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = EntityIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.to_string()
    }
}
