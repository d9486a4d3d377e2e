//! Recording doubles for the pet ports.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use petdex::domain::ports::{PetCommand, PetQuery, PetServiceError};
use petdex::domain::{EntityId, NewPet, Pet, PetChanges};

/// Call observed by [`RecordingPetCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandCall {
    Save { owner: String, name: String },
    Update { pet_id: String, owner: String },
}

/// Command double that records calls and replays a configured outcome.
#[derive(Clone)]
pub(crate) struct RecordingPetCommand {
    calls: Arc<Mutex<Vec<CommandCall>>>,
    response: Arc<Mutex<Result<(), PetServiceError>>>,
}

impl RecordingPetCommand {
    pub(crate) fn new(response: Result<(), PetServiceError>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(response)),
        }
    }

    pub(crate) fn calls(&self) -> Vec<CommandCall> {
        self.calls.lock().expect("pet command calls lock").clone()
    }

    pub(crate) fn set_response(&self, response: Result<(), PetServiceError>) {
        *self.response.lock().expect("pet command response lock") = response;
    }

    fn record(&self, call: CommandCall) -> Result<(), PetServiceError> {
        self.calls.lock().expect("pet command calls lock").push(call);
        self.response
            .lock()
            .expect("pet command response lock")
            .clone()
    }
}

#[async_trait]
impl PetCommand for RecordingPetCommand {
    async fn save(&self, new_pet: NewPet) -> Result<(), PetServiceError> {
        self.record(CommandCall::Save {
            owner: new_pet.owner().to_string(),
            name: new_pet.fields().name.to_string(),
        })
    }

    async fn update(
        &self,
        pet_id: &EntityId,
        owner: &EntityId,
        _changes: PetChanges,
    ) -> Result<(), PetServiceError> {
        self.record(CommandCall::Update {
            pet_id: pet_id.to_string(),
            owner: owner.to_string(),
        })
    }
}

/// Configurable outcome for [`RecordingPetQuery`].
#[derive(Clone)]
pub(crate) enum PetQueryResponse {
    Pets(Vec<Pet>),
    Err(PetServiceError),
}

/// Query double answering from a fixed set of pets.
#[derive(Clone)]
pub(crate) struct RecordingPetQuery {
    response: Arc<Mutex<PetQueryResponse>>,
}

impl RecordingPetQuery {
    pub(crate) fn new(response: PetQueryResponse) -> Self {
        Self {
            response: Arc::new(Mutex::new(response)),
        }
    }

    pub(crate) fn set_response(&self, response: PetQueryResponse) {
        *self.response.lock().expect("pet query response lock") = response;
    }

    fn pets(&self) -> Result<Vec<Pet>, PetServiceError> {
        match self.response.lock().expect("pet query response lock").clone() {
            PetQueryResponse::Pets(pets) => Ok(pets),
            PetQueryResponse::Err(error) => Err(error),
        }
    }
}

#[async_trait]
impl PetQuery for RecordingPetQuery {
    async fn find_by_id(&self, pet_id: &EntityId) -> Result<Pet, PetServiceError> {
        self.pets()?
            .into_iter()
            .find(|pet| pet.id() == pet_id)
            .ok_or_else(|| PetServiceError::not_found(pet_id.to_string()))
    }

    async fn list_user_pets(&self, owner: &EntityId) -> Result<Vec<Pet>, PetServiceError> {
        Ok(self
            .pets()?
            .into_iter()
            .filter(|pet| pet.user_id() == owner)
            .collect())
    }
}
