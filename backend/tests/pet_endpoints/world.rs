//! Shared world for the pet endpoint scenarios.
//!
//! Each request builds a fresh in-process app over the recording doubles and
//! drives it on an Actix runtime owned by the world.

use std::sync::Arc;

use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use petdex::Trace;
use petdex::domain::TRACE_ID_HEADER;
use petdex::domain::pet::RawPetFields;
use petdex::domain::{EntityId, NewPet, Pet};
use petdex::inbound::http::payload::json_config;
use petdex::inbound::http::pets::{create_pet, find_pet, list_user_pets, update_pet};
use petdex::inbound::http::state::HttpState;
use serde_json::Value;

use crate::doubles::{PetQueryResponse, RecordingPetCommand, RecordingPetQuery};

pub(crate) const OWNER: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
pub(crate) const BREED: &str = "9b2d3f0e-6c1a-4e8b-9d7f-1a2b3c4d5e6f";

pub(crate) struct PetEndpointsWorld {
    runtime: actix_rt::Runtime,
    pub(crate) command: RecordingPetCommand,
    pub(crate) query: RecordingPetQuery,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
}

impl PetEndpointsWorld {
    pub(crate) fn new() -> Self {
        Self {
            runtime: actix_rt::Runtime::new().expect("actix runtime"),
            command: RecordingPetCommand::new(Ok(())),
            query: RecordingPetQuery::new(PetQueryResponse::Pets(Vec::new())),
            last_status: None,
            last_body: None,
            last_trace_id: None,
        }
    }

    pub(crate) fn perform(&mut self, request: TestRequest) {
        let state = HttpState::new(
            Arc::new(self.command.clone()),
            Arc::new(self.query.clone()),
        );
        let (status, trace_id, body) = self.runtime.block_on(async move {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .app_data(json_config(4096))
                    .wrap(Trace)
                    .service(
                        web::scope("/api/v1")
                            .service(create_pet)
                            .service(update_pet)
                            .service(find_pet)
                            .service(list_user_pets),
                    ),
            )
            .await;
            let res = test::call_service(&app, request.to_request()).await;
            let status = res.status().as_u16();
            let trace_id = res
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = test::read_body(res).await;
            (status, trace_id, serde_json::from_slice::<Value>(&bytes).ok())
        });
        self.last_status = Some(status);
        self.last_trace_id = trace_id;
        self.last_body = body;
    }
}

pub(crate) fn pet_named(name: &str) -> Pet {
    let raw = RawPetFields {
        name: Some(name.to_owned()),
        breed_id: Some(BREED.to_owned()),
        size: Some("large".to_owned()),
        weight: Some(30.0),
        weight_measure: Some("kg".to_owned()),
        adoption_date: Some("2023-05-02".to_owned()),
        birthdate: Some("2022-12-24".to_owned()),
        ..RawPetFields::default()
    };
    let new_pet = NewPet::validate(Some(OWNER.to_owned()), raw).expect("fixture pet");
    Pet::create(EntityId::random(), new_pet)
}
