//! Shared validation helpers for inbound HTTP adapters.
//!
//! Path identifiers and domain validation failures are turned into error
//! envelopes here so every handler reports them with the same shape.

use serde_json::{Map, Value, json};

use crate::domain::pet::PetValidationError;
use crate::domain::{EntityId, Error};

/// Description used for every malformed path identifier.
pub(crate) const INVALID_ID_DESCRIPTION: &str = "Bad Request: Invalid ID";

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    Error::invalid_id(INVALID_ID_DESCRIPTION).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": "invalid_uuid",
    }))
}

/// Parse a path segment into an [`EntityId`].
pub(crate) fn parse_entity_id(value: &str, field: FieldName) -> Result<EntityId, Error> {
    EntityId::parse(value).map_err(|_| invalid_id_error(field, value))
}

/// Map a validator failure onto the `validation_failed` envelope.
pub(crate) fn map_pet_validation_error(err: &PetValidationError) -> Error {
    let mut details = Map::new();
    if let Some(field) = err.field() {
        details.insert("field".to_owned(), Value::from(field.as_str()));
    }
    if let Some(value) = err.value() {
        details.insert("value".to_owned(), Value::from(value));
    }
    details.insert("code".to_owned(), Value::from(err.code()));

    Error::validation_failed(err.to_string()).with_details(Value::Object(details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::pet::PetField;
    use rstest::rstest;

    const PET_ID: FieldName = FieldName::new("petId");

    #[rstest]
    fn parse_entity_id_accepts_uuid() {
        let id = parse_entity_id("3fa85f64-5717-4562-b3fc-2c963f66afa6", PET_ID)
            .expect("valid identifier");
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    #[case("not-a-valid-id")]
    #[case("")]
    #[case("12345")]
    fn parse_entity_id_reports_field_and_value(#[case] raw: &str) {
        let err = parse_entity_id(raw, PET_ID).expect_err("malformed identifier");
        assert_eq!(err.code(), ErrorCode::InvalidId);
        assert_eq!(err.description(), "Bad Request: Invalid ID");
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "petId", "value": raw, "code": "invalid_uuid" }))
        );
    }

    #[rstest]
    fn validation_errors_carry_field_and_code() {
        let err = map_pet_validation_error(&PetValidationError::MissingField {
            field: PetField::Name,
        });
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.description(), "missing required field: name");
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "name", "code": "missing_field" }))
        );
    }

    #[rstest]
    fn validation_errors_echo_rejected_values() {
        let err = map_pet_validation_error(&PetValidationError::UnknownSize {
            value: "tiny".to_owned(),
        });
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "size", "value": "tiny", "code": "unknown_size" }))
        );
    }

    #[rstest]
    fn empty_update_has_no_field() {
        let err = map_pet_validation_error(&PetValidationError::EmptyUpdate);
        assert_eq!(err.details(), Some(&json!({ "code": "empty_update" })));
    }
}
