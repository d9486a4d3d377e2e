//! Process-local pet store.
//!
//! Records live in a `Vec` behind a `RwLock`, so listings come back in
//! insertion order. The lock is only held for the synchronous body of each
//! operation. A poisoned lock is reported as a query failure.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{PetCommand, PetQuery, PetServiceError};
use crate::domain::{EntityId, NewPet, Pet, PetChanges};

const POISONED: &str = "pet store lock poisoned";

/// Pet store implementing [`PetCommand`] and [`PetQuery`] in memory.
#[derive(Debug, Default)]
pub struct InMemoryPetStore {
    pets: RwLock<Vec<Pet>>,
}

impl InMemoryPetStore {
    /// Seed a store with existing records.
    pub fn with_pets(pets: impl IntoIterator<Item = Pet>) -> Self {
        Self {
            pets: RwLock::new(pets.into_iter().collect()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Pet>>, PetServiceError> {
        self.pets.read().map_err(|_| PetServiceError::query(POISONED))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Pet>>, PetServiceError> {
        self.pets.write().map_err(|_| PetServiceError::query(POISONED))
    }
}

#[async_trait]
impl PetCommand for InMemoryPetStore {
    async fn save(&self, new_pet: NewPet) -> Result<(), PetServiceError> {
        let pet = Pet::create(EntityId::random(), new_pet);
        let (pet_id, owner) = (*pet.id(), *pet.user_id());
        self.write()?.push(pet);
        debug!(pet_id = %pet_id, owner = %owner, "pet stored");
        Ok(())
    }

    async fn update(
        &self,
        pet_id: &EntityId,
        owner: &EntityId,
        changes: PetChanges,
    ) -> Result<(), PetServiceError> {
        let mut pets = self.write()?;
        let slot = pets
            .iter_mut()
            .find(|pet| pet.id() == pet_id)
            .ok_or_else(|| PetServiceError::not_found(pet_id.to_string()))?;
        if slot.user_id() != owner {
            return Err(PetServiceError::rejected("pet belongs to another user"));
        }
        *slot = slot
            .apply(changes)
            .map_err(|err| PetServiceError::rejected(err.to_string()))?;
        debug!(pet_id = %pet_id, "pet updated");
        Ok(())
    }
}

#[async_trait]
impl PetQuery for InMemoryPetStore {
    async fn find_by_id(&self, pet_id: &EntityId) -> Result<Pet, PetServiceError> {
        self.read()?
            .iter()
            .find(|pet| pet.id() == pet_id)
            .cloned()
            .ok_or_else(|| PetServiceError::not_found(pet_id.to_string()))
    }

    async fn list_user_pets(&self, owner: &EntityId) -> Result<Vec<Pet>, PetServiceError> {
        Ok(self
            .read()?
            .iter()
            .filter(|pet| pet.user_id() == owner)
            .cloned()
            .collect())
    }
}
