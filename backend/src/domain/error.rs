//! Domain-level error envelope.
//!
//! Every failure a client can observe is expressed as one [`Error`]: a
//! stable [`ErrorCode`] discriminant, a human-readable description, the
//! request trace identifier and optional structured details. The type is
//! transport agnostic; the HTTP adapter maps codes to status codes and
//! redacts server faults before serialising.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request body could not be decoded.
    InvalidBody,
    /// A path identifier is not a valid entity identifier.
    InvalidId,
    /// A decoded payload violates a domain rule.
    ValidationFailed,
    /// The use-case rejected an otherwise well-formed request.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// A backing dependency is unavailable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

impl ErrorCode {
    /// True for codes describing a server-side fault.
    #[must_use]
    pub fn is_server_fault(self) -> bool {
        matches!(self, Self::ServiceUnavailable | Self::InternalError)
    }
}

/// Error envelope returned to adapters.
///
/// ## Invariants
/// - `description` is non-empty once trimmed of whitespace.
/// - `trace_id`, when present, is non-empty once trimmed.
///
/// # Examples
/// ```
/// use petdex::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::NotFound, "missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.description(), "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    description: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

/// Validation errors raised by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    #[error("error description must not be empty")]
    EmptyDescription,
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

impl Error {
    /// Create a new error, panicking if the description is blank.
    ///
    /// Captures the trace identifier in scope, if any.
    pub fn new(code: ErrorCode, description: impl Into<String>) -> Self {
        match Self::try_new(code, description) {
            Ok(value) => value,
            Err(err) => panic!("error descriptions must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the description.
    pub fn try_new(
        code: ErrorCode,
        description: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ErrorValidationError::EmptyDescription);
        }
        Ok(Self {
            code,
            description,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        })
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Correlation identifier, if one was captured or attached.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier, panicking if it is blank.
    #[must_use]
    pub fn with_trace_id(self, id: impl Into<String>) -> Self {
        match self.try_with_trace_id(id) {
            Ok(value) => value,
            Err(err) => panic!("trace identifiers must satisfy validation: {err}"),
        }
    }

    /// Attach a trace identifier, rejecting blank values.
    pub fn try_with_trace_id(
        mut self,
        id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        self.trace_id = Some(id);
        Ok(self)
    }

    /// Attach structured details.
    ///
    /// # Examples
    /// ```
    /// use petdex::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::validation_failed("bad").with_details(json!({ "field": "name" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidBody`].
    pub fn invalid_body(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidBody, description)
    }

    /// Convenience constructor for [`ErrorCode::InvalidId`].
    pub fn invalid_id(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidId, description)
    }

    /// Convenience constructor for [`ErrorCode::ValidationFailed`].
    pub fn validation_failed(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, description)
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, description)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, description)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, description)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, description)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: ErrorCode,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        let Error {
            code,
            description,
            trace_id,
            details,
        } = value;
        Self {
            code,
            description,
            trace_id,
            details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            description,
            trace_id,
            details,
        } = value;

        let mut error = Error::try_new(code, description)?;
        // Payloads carry their own correlation; never inherit the ambient one.
        error.trace_id = None;
        if let Some(id) = trace_id {
            error = error.try_with_trace_id(id)?;
        }
        error.details = details;
        Ok(error)
    }
}
