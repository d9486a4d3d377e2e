//! HTTP adapter mapping for domain errors.
//!
//! The domain [`Error`] stays transport agnostic; this module assigns each
//! [`ErrorCode`] its status and strips server faults down to a generic
//! envelope before anything reaches the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

pub use crate::domain::ApiResult;

const INTERNAL_DESCRIPTION: &str = "Internal server error";
const UNAVAILABLE_DESCRIPTION: &str = "Service temporarily unavailable";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidBody
        | ErrorCode::InvalidId
        | ErrorCode::ValidationFailed
        | ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Client-facing copy of `error`.
///
/// Server faults lose their description and details; the original is logged
/// with its trace id so operators can still correlate it.
fn redact_server_fault(error: &Error) -> Error {
    if !error.code().is_server_fault() {
        return error.clone();
    }
    let generic = if error.code() == ErrorCode::ServiceUnavailable {
        UNAVAILABLE_DESCRIPTION
    } else {
        INTERNAL_DESCRIPTION
    };

    error!(
        code = ?error.code(),
        trace_id = error.trace_id().unwrap_or("-"),
        description = error.description(),
        details = ?error.details(),
        "server fault redacted from client response"
    );

    let redacted = Error::new(error.code(), generic);
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id.to_owned()),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_server_fault(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(INTERNAL_DESCRIPTION)
    }
}
