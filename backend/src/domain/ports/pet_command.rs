//! Driving port for pet mutations.

use async_trait::async_trait;

use crate::domain::EntityId;
use crate::domain::pet::{NewPet, PetChanges};

use super::PetServiceError;

/// Write side of the pet usecase.
///
/// Payloads arrive already validated; implementations enforce business rules
/// such as ownership and report them through [`PetServiceError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetCommand: Send + Sync {
    /// Persist a new pet.
    async fn save(&self, new_pet: NewPet) -> Result<(), PetServiceError>;

    /// Apply `changes` to the pet `pet_id` owned by `owner`.
    ///
    /// Returns [`PetServiceError::NotFound`] when the pet does not exist and
    /// [`PetServiceError::Rejected`] when it belongs to someone else.
    async fn update(
        &self,
        pet_id: &EntityId,
        owner: &EntityId,
        changes: PetChanges,
    ) -> Result<(), PetServiceError>;
}
