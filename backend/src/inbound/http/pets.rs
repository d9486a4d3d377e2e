//! Pet HTTP handlers.
//!
//! ```text
//! POST /api/v1/pets
//! PUT  /api/v1/users/{userId}/pets/{petId}
//! GET  /api/v1/pets/{id}
//! GET  /api/v1/users/{id}/pets
//! ```
//!
//! Each handler runs Decode/Parse, Validate, Invoke and Encode in that order
//! and stops at the first failure. Bodies decode into DTOs whose members are
//! all optional, so an absent field is reported by the validator rather than
//! the JSON decoder.

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::pet::{NewPet, PetChanges, PetValidationError, RawPetFields};
use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::decoded;
use crate::inbound::http::schemas::{ErrorSchema, PetSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, map_pet_validation_error, parse_entity_id};

const USER_ID: FieldName = FieldName::new("userId");
const PET_ID: FieldName = FieldName::new("petId");
const ID: FieldName = FieldName::new("id");

/// Request payload for creating a pet.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetInsertDto {
    /// Owning user.
    #[schema(format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub user_id: Option<String>,
    #[schema(example = "Rex", max_length = 80)]
    pub name: Option<String>,
    #[schema(format = "uuid")]
    pub breed_id: Option<String>,
    /// One of `small`, `medium`, `large` or `giant`.
    #[schema(example = "medium")]
    pub size: Option<String>,
    #[schema(example = 12.5)]
    pub weight: Option<f64>,
    /// `kg` or `lb`.
    #[schema(example = "kg")]
    pub weight_measure: Option<String>,
    #[schema(format = "date", example = "2021-06-01")]
    pub adoption_date: Option<String>,
    #[schema(format = "date", example = "2020-01-15")]
    pub birthdate: Option<String>,
    pub castrated: Option<bool>,
    pub available_to_adoption: Option<bool>,
    pub comorbidity: Option<String>,
}

impl PetInsertDto {
    fn into_parts(self) -> (Option<String>, RawPetFields) {
        let Self {
            user_id,
            name,
            breed_id,
            size,
            weight,
            weight_measure,
            adoption_date,
            birthdate,
            castrated,
            available_to_adoption,
            comorbidity,
        } = self;
        let raw = RawPetFields {
            name,
            breed_id,
            size,
            weight,
            weight_measure,
            adoption_date,
            birthdate,
            castrated,
            available_to_adoption,
            comorbidity,
        };
        (user_id, raw)
    }
}

/// Request payload for updating a pet. Only present members change.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetUpdateDto {
    #[schema(example = "Rex", max_length = 80)]
    pub name: Option<String>,
    #[schema(format = "uuid")]
    pub breed_id: Option<String>,
    #[schema(example = "large")]
    pub size: Option<String>,
    #[schema(example = 14.0)]
    pub weight: Option<f64>,
    #[schema(example = "kg")]
    pub weight_measure: Option<String>,
    #[schema(format = "date")]
    pub adoption_date: Option<String>,
    #[schema(format = "date")]
    pub birthdate: Option<String>,
    pub castrated: Option<bool>,
    pub available_to_adoption: Option<bool>,
    pub comorbidity: Option<String>,
}

impl From<PetUpdateDto> for RawPetFields {
    fn from(value: PetUpdateDto) -> Self {
        let PetUpdateDto {
            name,
            breed_id,
            size,
            weight,
            weight_measure,
            adoption_date,
            birthdate,
            castrated,
            available_to_adoption,
            comorbidity,
        } = value;
        Self {
            name,
            breed_id,
            size,
            weight,
            weight_measure,
            adoption_date,
            birthdate,
            castrated,
            available_to_adoption,
            comorbidity,
        }
    }
}

fn rejected_payload(err: &PetValidationError) -> Error {
    warn!(code = err.code(), error = %err, "pet payload failed validation");
    map_pet_validation_error(err)
}

/// Create a pet.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use petdex::inbound::http::pets::create_pet;
///
/// let app = App::new().service(create_pet);
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/pets",
    request_body = PetInsertDto,
    responses(
        (status = 201, description = "Pet created"),
        (status = 400, description = "Invalid body, failed validation or rejected", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["pets"],
    operation_id = "createPet"
)]
#[post("/pets")]
pub async fn create_pet(
    state: web::Data<HttpState>,
    payload: web::Json<PetInsertDto>,
) -> ApiResult<HttpResponse> {
    let (owner, raw) = payload.into_inner().into_parts();
    let new_pet = NewPet::validate(owner, raw).map_err(|err| rejected_payload(&err))?;

    state.pets.save(new_pet).await?;
    Ok(HttpResponse::Created().finish())
}

/// Update a pet owned by the user in the path.
///
/// Identifiers are checked before the body, so a request with both a bad id
/// and a bad body reports `invalid_id`.
#[utoipa::path(
    put,
    path = "/api/v1/users/{userId}/pets/{petId}",
    params(
        ("userId" = String, Path, description = "Owning user identifier"),
        ("petId" = String, Path, description = "Pet identifier")
    ),
    request_body = PetUpdateDto,
    responses(
        (status = 200, description = "Pet updated"),
        (status = 400, description = "Invalid id, body or payload", body = ErrorSchema),
        (status = 404, description = "Pet not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["pets"],
    operation_id = "updatePet"
)]
#[put("/users/{userId}/pets/{petId}")]
pub async fn update_pet(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    payload: Result<web::Json<PetUpdateDto>, actix_web::Error>,
) -> ApiResult<HttpResponse> {
    let (user_id, pet_id) = path.into_inner();
    let owner = parse_entity_id(&user_id, USER_ID)?;
    let pet_id = parse_entity_id(&pet_id, PET_ID)?;
    let changes = PetChanges::validate(decoded(payload)?.into())
        .map_err(|err| rejected_payload(&err))?;

    state.pets.update(&pet_id, &owner, changes).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Fetch a pet by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/pets/{id}",
    params(("id" = String, Path, description = "Pet identifier")),
    responses(
        (status = 200, description = "Pet", body = PetSchema),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "Pet not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["pets"],
    operation_id = "findPet"
)]
#[get("/pets/{id}")]
pub async fn find_pet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let pet_id = parse_entity_id(&path.into_inner(), ID)?;
    let pet = state.pets_query.find_by_id(&pet_id).await?;
    Ok(HttpResponse::Ok().json(pet))
}

/// List the pets owned by a user, in the order the store returns them.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/pets",
    params(("id" = String, Path, description = "Owning user identifier")),
    responses(
        (status = 200, description = "Pets owned by the user", body = [PetSchema]),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["pets"],
    operation_id = "listUserPets"
)]
#[get("/users/{id}/pets")]
pub async fn list_user_pets(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let owner = parse_entity_id(&path.into_inner(), ID)?;
    let pets = state.pets_query.list_user_pets(&owner).await?;
    Ok(HttpResponse::Ok().json(pets))
}

#[cfg(test)]
#[path = "pets_tests.rs"]
mod tests;
