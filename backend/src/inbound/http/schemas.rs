//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and are registered with utoipa under
//! the domain type names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body could not be decoded.
    #[schema(rename = "invalid_body")]
    InvalidBody,
    /// A path identifier is malformed.
    #[schema(rename = "invalid_id")]
    InvalidId,
    /// The payload violates a field or cross-field rule.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// The usecase refused the request.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing dependency is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_id")]
    code: ErrorCodeSchema,
    /// Human-readable description returned to clients.
    #[schema(example = "Bad Request: Invalid ID")]
    description: String,
    /// Correlation identifier, echoed in the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::pet::PetSize`].
#[derive(ToSchema)]
#[schema(as = PetSize)]
pub enum PetSizeSchema {
    #[schema(rename = "small")]
    Small,
    #[schema(rename = "medium")]
    Medium,
    #[schema(rename = "large")]
    Large,
    #[schema(rename = "giant")]
    Giant,
}

/// OpenAPI schema for [`crate::domain::pet::WeightMeasure`].
#[derive(ToSchema)]
#[schema(as = WeightMeasure)]
pub enum WeightMeasureSchema {
    #[schema(rename = "kg")]
    Kg,
    #[schema(rename = "lb")]
    Lb,
}

/// OpenAPI schema for [`crate::domain::Pet`].
#[derive(ToSchema)]
#[schema(as = Pet, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PetSchema {
    #[schema(format = "uuid", example = "c0ffee00-0000-4000-8000-000000000001")]
    id: String,
    /// Owning user.
    #[schema(format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    user_id: String,
    #[schema(format = "uuid")]
    breed_id: String,
    #[schema(example = "Rex", max_length = 80)]
    name: String,
    size: PetSizeSchema,
    /// Strictly positive.
    #[schema(example = 12.5)]
    weight: f64,
    weight_measure: WeightMeasureSchema,
    #[schema(format = "date", example = "2021-06-01")]
    adoption_date: String,
    #[schema(format = "date", example = "2020-01-15")]
    birthdate: String,
    castrated: Option<bool>,
    available_to_adoption: Option<bool>,
    comorbidity: Option<String>,
}
