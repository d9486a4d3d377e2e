//! Domain primitives and aggregates.
//!
//! Types here are transport agnostic. Inbound adapters translate wire input
//! into these types and map [`Error`] back onto their protocol.
//!
//! Public surface:
//! - Error / ErrorCode: failure envelope shared by every adapter.
//! - EntityId: parsed pet and user identifiers.
//! - TraceId: request correlation identifier in task-local scope.
//! - pet: the pet aggregate, its value types and the shared validator.

pub mod entity_id;
pub mod error;
pub mod pet;
pub mod ports;
pub mod trace_id;

pub use self::entity_id::{EntityId, EntityIdError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::pet::{NewPet, Pet, PetChanges, PetValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use petdex::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_id("Bad Request: Invalid ID"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
