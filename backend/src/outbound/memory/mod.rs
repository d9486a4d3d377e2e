//! In-process adapters for running the service without external storage.

mod pet_store;

pub use pet_store::InMemoryPetStore;
