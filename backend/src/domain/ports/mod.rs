//! Domain ports for the hexagonal boundary.
//!
//! Inbound adapters drive the pet usecase through [`PetCommand`] and
//! [`PetQuery`]; outbound adapters implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod pet_command;
mod pet_query;
mod pet_service;

#[cfg(test)]
pub use pet_command::MockPetCommand;
pub use pet_command::PetCommand;
#[cfg(test)]
pub use pet_query::MockPetQuery;
pub use pet_query::PetQuery;
pub use pet_service::PetServiceError;
