//! JSON body decoding for pet payloads.
//!
//! Bodies are decoded by Actix's `web::Json` extractor. The extractor owns the
//! request stream and drops it on every exit path; this module only decides
//! how a decode failure is reported: always `invalid_body`, with a reason code
//! in the details so clients can tell a truncated body from a type mismatch.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::{error::Category, json};
use tracing::warn;

use crate::domain::Error;

/// Description shared by every body decoding failure.
pub const INVALID_BODY_DESCRIPTION: &str = "The body is invalid";

/// Why a request body could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFailure {
    MalformedJson,
    TruncatedJson,
    TypeMismatch,
    UnsupportedContentType,
    PayloadTooLarge,
    Unreadable,
}

impl DecodeFailure {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedJson => "malformed_json",
            Self::TruncatedJson => "truncated_json",
            Self::TypeMismatch => "type_mismatch",
            Self::UnsupportedContentType => "unsupported_content_type",
            Self::PayloadTooLarge => "payload_too_large",
            Self::Unreadable => "unreadable",
        }
    }

    /// Classify an extractor failure.
    #[must_use]
    pub fn classify(err: &JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Deserialize(inner) => match inner.classify() {
                Category::Syntax => Self::MalformedJson,
                Category::Eof => Self::TruncatedJson,
                Category::Data => Self::TypeMismatch,
                Category::Io => Self::Unreadable,
            },
            JsonPayloadError::ContentType => Self::UnsupportedContentType,
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                Self::PayloadTooLarge
            }
            _ => Self::Unreadable,
        }
    }
}

/// Map a body decoding failure onto the `invalid_body` envelope.
pub fn invalid_body_error(err: &JsonPayloadError, req: &HttpRequest) -> Error {
    let reason = DecodeFailure::classify(err);
    warn!(
        method = %req.method(),
        path = req.path(),
        reason = reason.as_str(),
        error = %err,
        "request body rejected"
    );
    Error::invalid_body(INVALID_BODY_DESCRIPTION).with_details(json!({ "code": reason.as_str() }))
}

/// Unwrap a body extracted as `Result<web::Json<T>, actix_web::Error>`.
///
/// Handlers that must validate path parameters before reporting a body
/// failure take the extractor result and call this afterwards. Failures raised
/// by [`json_config`] already carry the envelope and are returned unchanged.
pub fn decoded<T>(payload: Result<web::Json<T>, actix_web::Error>) -> Result<T, Error> {
    payload
        .map(web::Json::into_inner)
        .map_err(|err| match err.as_error::<Error>() {
            Some(envelope) => envelope.clone(),
            None => Error::from(err),
        })
}

/// Extractor configuration shared by every JSON endpoint.
///
/// `limit` caps the body size in bytes.
#[must_use]
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| invalid_body_error(&err, req).into())
}
