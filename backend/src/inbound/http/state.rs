//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PetCommand, PetQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub pets: Arc<dyn PetCommand>,
    pub pets_query: Arc<dyn PetQuery>,
}

impl HttpState {
    /// Construct state from the pet usecase ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use petdex::inbound::http::state::HttpState;
    /// use petdex::outbound::memory::InMemoryPetStore;
    ///
    /// let store = Arc::new(InMemoryPetStore::default());
    /// let state = HttpState::new(store.clone(), store);
    /// let _query = state.pets_query.clone();
    /// ```
    pub fn new(pets: Arc<dyn PetCommand>, pets_query: Arc<dyn PetQuery>) -> Self {
        Self { pets, pets_query }
    }
}
