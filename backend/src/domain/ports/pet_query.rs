//! Driving port for pet reads.

use async_trait::async_trait;

use crate::domain::EntityId;
use crate::domain::pet::Pet;

use super::PetServiceError;

/// Read side of the pet usecase.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetQuery: Send + Sync {
    /// Fetch one pet, or [`PetServiceError::NotFound`].
    async fn find_by_id(&self, pet_id: &EntityId) -> Result<Pet, PetServiceError>;

    /// All pets owned by `owner`, in storage order. An unknown owner simply
    /// has no pets.
    async fn list_user_pets(&self, owner: &EntityId) -> Result<Vec<Pet>, PetServiceError>;
}
