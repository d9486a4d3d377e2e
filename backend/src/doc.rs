//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the pet endpoints, the health probes and the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document is served by
//! Swagger UI in debug builds and printed by the `openapi-dump` binary.

use utoipa::openapi::header::{Header, HeaderBuilder};
use utoipa::openapi::schema::{KnownFormat, ObjectBuilder, SchemaFormat, Type};
use utoipa::openapi::RefOr;
use utoipa::{Modify, OpenApi};

use crate::domain::TRACE_ID_HEADER;
use crate::inbound::http::pets::{PetInsertDto, PetUpdateDto};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, PetSchema, PetSizeSchema, WeightMeasureSchema,
};

fn trace_header() -> Header {
    HeaderBuilder::new()
        .schema(
            ObjectBuilder::new()
                .schema_type(Type::String)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Uuid)))
                .build(),
        )
        .description(Some("Request trace identifier, also echoed in error bodies."))
        .build()
}

/// Document the `trace-id` header the trace middleware adds to every response.
struct TraceHeaderAddon;

impl Modify for TraceHeaderAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for item in openapi.paths.paths.values_mut() {
            let operations = [
                &mut item.get,
                &mut item.put,
                &mut item.post,
                &mut item.delete,
                &mut item.patch,
            ];
            for operation in operations.into_iter().flatten() {
                for response in operation.responses.responses.values_mut() {
                    if let RefOr::T(response) = response {
                        response
                            .headers
                            .insert(TRACE_ID_HEADER.to_owned(), trace_header());
                    }
                }
            }
        }
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&TraceHeaderAddon),
    info(
        title = "Petdex API",
        description = "Create, update and look up pet records owned by users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::pets::create_pet,
        crate::inbound::http::pets::update_pet,
        crate::inbound::http::pets::find_pet,
        crate::inbound::http::pets::list_user_pets,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PetSchema,
        PetSizeSchema,
        WeightMeasureSchema,
        PetInsertDto,
        PetUpdateDto,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "pets", description = "Pet records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
