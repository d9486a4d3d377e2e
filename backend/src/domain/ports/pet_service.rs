//! Failures reported by the pet usecase collaborator.

use crate::domain::{Error, ErrorCode};

use super::define_port_error;

define_port_error! {
    /// Typed outcome of a failed pet usecase call.
    ///
    /// Inbound adapters branch on the variant, never on the message.
    pub enum PetServiceError {
        /// No pet matches the requested identifier.
        NotFound { id: String } => "pet not found: {id}",
        /// A business rule refused the request; the message is client safe.
        Rejected { message: String } => "{message}",
        /// The backing store could not be reached.
        Connection { message: String } => "pet store connection failed: {message}",
        /// The backing store failed while executing the operation.
        Query { message: String } => "pet store query failed: {message}",
    }
}

/// Description used when a rejection carries no message.
const REJECTED_FALLBACK: &str = "Request rejected";

impl From<PetServiceError> for Error {
    fn from(err: PetServiceError) -> Self {
        match err {
            PetServiceError::NotFound { .. } => Error::not_found(err.to_string()),
            PetServiceError::Rejected { message } => {
                Error::try_new(ErrorCode::InvalidRequest, message)
                    .unwrap_or_else(|_| Error::invalid_request(REJECTED_FALLBACK))
            }
            PetServiceError::Connection { .. } => Error::service_unavailable(err.to_string()),
            PetServiceError::Query { .. } => Error::internal(err.to_string()),
        }
    }
}
