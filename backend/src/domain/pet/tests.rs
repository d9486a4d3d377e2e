//! Tests for pet value types and the shared validator.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const OWNER: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
const BREED: &str = "9b2d3f0e-6c1a-4e8b-9d7f-1a2b3c4d5e6f";
const PET: &str = "c0ffee00-0000-4000-8000-000000000001";

#[fixture]
fn raw_fields() -> RawPetFields {
    RawPetFields {
        name: Some("  Rex ".to_owned()),
        breed_id: Some(BREED.to_owned()),
        size: Some("medium".to_owned()),
        weight: Some(12.5),
        weight_measure: Some("kg".to_owned()),
        adoption_date: Some("2021-06-01".to_owned()),
        birthdate: Some("2020-01-15".to_owned()),
        castrated: Some(true),
        available_to_adoption: None,
        comorbidity: Some("  ".to_owned()),
    }
}

#[fixture]
fn stored_pet(raw_fields: RawPetFields) -> Pet {
    let new_pet = NewPet::validate(Some(OWNER.to_owned()), raw_fields).expect("valid insert");
    Pet::create(EntityId::parse(PET).expect("pet id"), new_pet)
}

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("fixture date")
}

#[rstest]
fn insert_accepts_complete_payload(raw_fields: RawPetFields) {
    let new_pet = NewPet::validate(Some(OWNER.to_owned()), raw_fields).expect("valid insert");

    assert_eq!(new_pet.owner().to_string(), OWNER);
    let fields = new_pet.fields();
    assert_eq!(fields.name.to_string(), "Rex");
    assert_eq!(fields.size, PetSize::Medium);
    assert_eq!(fields.weight.value(), 12.5);
    assert_eq!(fields.weight_measure, WeightMeasure::Kg);
    assert_eq!(fields.birthdate, date("2020-01-15"));
    assert_eq!(fields.castrated, Some(true));
    assert_eq!(fields.comorbidity, None, "blank comorbidity is dropped");
}

#[rstest]
fn insert_reports_owner_before_other_fields() {
    let result = NewPet::validate(None, RawPetFields::default());
    assert_eq!(
        result,
        Err(PetValidationError::MissingField {
            field: PetField::UserId
        })
    );
}

#[rstest]
fn insert_rejects_malformed_owner(raw_fields: RawPetFields) {
    let result = NewPet::validate(Some("owner-1".to_owned()), raw_fields);
    assert_eq!(
        result,
        Err(PetValidationError::InvalidId {
            field: PetField::UserId,
            value: "owner-1".to_owned(),
        })
    );
}

#[rstest]
#[case::name(PetField::Name)]
#[case::breed(PetField::BreedId)]
#[case::size(PetField::Size)]
#[case::weight(PetField::Weight)]
#[case::measure(PetField::WeightMeasure)]
#[case::adoption(PetField::AdoptionDate)]
#[case::birth(PetField::Birthdate)]
fn insert_requires_mandatory_fields(mut raw_fields: RawPetFields, #[case] field: PetField) {
    match field {
        PetField::Name => raw_fields.name = None,
        PetField::BreedId => raw_fields.breed_id = None,
        PetField::Size => raw_fields.size = None,
        PetField::Weight => raw_fields.weight = None,
        PetField::WeightMeasure => raw_fields.weight_measure = None,
        PetField::AdoptionDate => raw_fields.adoption_date = None,
        PetField::Birthdate => raw_fields.birthdate = None,
        PetField::UserId => panic!("owner is not part of the shared fields"),
    }

    let error = NewPet::validate(Some(OWNER.to_owned()), raw_fields).expect_err("missing field");
    assert_eq!(error, PetValidationError::MissingField { field });
    assert_eq!(error.field(), Some(field));
    assert_eq!(error.code(), "missing_field");
}

#[rstest]
fn insert_stops_at_first_violation(mut raw_fields: RawPetFields) {
    raw_fields.name = Some("   ".to_owned());
    raw_fields.size = Some("tiny".to_owned());
    raw_fields.weight = Some(-1.0);

    let result = NewPet::validate(Some(OWNER.to_owned()), raw_fields);
    assert_eq!(result, Err(PetValidationError::EmptyName));
}

#[rstest]
fn name_longer_than_limit_is_rejected() {
    let result = PetName::new("x".repeat(PET_NAME_MAX + 1));
    assert_eq!(
        result,
        Err(PetValidationError::NameTooLong { max: PET_NAME_MAX })
    );
    assert!(PetName::new("é".repeat(PET_NAME_MAX)).is_ok());
}

#[rstest]
#[case("small", PetSize::Small)]
#[case("Medium", PetSize::Medium)]
#[case("LARGE", PetSize::Large)]
#[case("giant", PetSize::Giant)]
fn size_parsing_ignores_case(#[case] raw: &str, #[case] expected: PetSize) {
    assert_eq!(raw.parse::<PetSize>(), Ok(expected));
}

#[rstest]
#[case(0.0)]
#[case(-3.2)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn weight_must_be_finite_and_positive(#[case] raw: f64) {
    assert_eq!(Weight::new(raw), Err(PetValidationError::InvalidWeight));
}

#[rstest]
#[case::size(
    RawPetFields { size: Some("tiny".into()), ..RawPetFields::default() },
    PetValidationError::UnknownSize { value: "tiny".into() }
)]
#[case::measure(
    RawPetFields { weight_measure: Some("stone".into()), ..RawPetFields::default() },
    PetValidationError::UnknownWeightMeasure { value: "stone".into() }
)]
#[case::date(
    RawPetFields { birthdate: Some("2020/01/15".into()), ..RawPetFields::default() },
    PetValidationError::InvalidDate { field: PetField::Birthdate, value: "2020/01/15".into() }
)]
#[case::breed(
    RawPetFields { breed_id: Some("breed".into()), ..RawPetFields::default() },
    PetValidationError::InvalidId { field: PetField::BreedId, value: "breed".into() }
)]
fn update_checks_present_fields(#[case] raw: RawPetFields, #[case] expected: PetValidationError) {
    assert_eq!(PetChanges::validate(raw), Err(expected));
}

#[rstest]
fn update_rejects_empty_payload() {
    let error = PetChanges::validate(RawPetFields::default()).expect_err("empty update");
    assert_eq!(error, PetValidationError::EmptyUpdate);
    assert_eq!(error.field(), None);
}

#[rstest]
fn update_with_only_blank_comorbidity_is_empty() {
    let raw = RawPetFields {
        comorbidity: Some("   ".to_owned()),
        ..RawPetFields::default()
    };
    assert_eq!(
        PetChanges::validate(raw),
        Err(PetValidationError::EmptyUpdate)
    );
}

#[rstest]
fn update_accepts_partial_payload() {
    let raw = RawPetFields {
        weight: Some(14.0),
        ..RawPetFields::default()
    };
    let changes = PetChanges::validate(raw).expect("valid update");
    assert_eq!(changes.fields().weight.map(Weight::value), Some(14.0));
    assert!(changes.fields().name.is_none());
}

#[rstest]
fn adoption_before_birth_is_rejected_on_insert(mut raw_fields: RawPetFields) {
    raw_fields.adoption_date = Some("2019-12-31".to_owned());
    let result = NewPet::validate(Some(OWNER.to_owned()), raw_fields);
    assert_eq!(result, Err(PetValidationError::AdoptionBeforeBirth));
}

#[rstest]
fn adoption_before_birth_is_rejected_when_both_dates_change() {
    let raw = RawPetFields {
        adoption_date: Some("2020-01-01".to_owned()),
        birthdate: Some("2020-02-01".to_owned()),
        ..RawPetFields::default()
    };
    assert_eq!(
        PetChanges::validate(raw),
        Err(PetValidationError::AdoptionBeforeBirth)
    );
}

#[rstest]
fn apply_merges_changes(stored_pet: Pet) {
    let changes = PetChanges::validate(RawPetFields {
        name: Some("Max".to_owned()),
        available_to_adoption: Some(false),
        ..RawPetFields::default()
    })
    .expect("valid update");

    let updated = stored_pet.apply(changes).expect("merge");
    assert_eq!(updated.name().to_string(), "Max");
    assert_eq!(updated.available_to_adoption(), Some(false));
    assert_eq!(updated.size(), stored_pet.size());
    assert_eq!(updated.id(), stored_pet.id());
    assert_eq!(updated.user_id(), stored_pet.user_id());
}

#[rstest]
fn apply_rechecks_dates_against_stored_record(stored_pet: Pet) {
    let changes = PetChanges::validate(RawPetFields {
        birthdate: Some("2022-01-01".to_owned()),
        ..RawPetFields::default()
    })
    .expect("single date is valid on its own");

    assert_eq!(
        stored_pet.apply(changes),
        Err(PetValidationError::AdoptionBeforeBirth)
    );
}

#[rstest]
fn pet_serialises_as_camel_case(stored_pet: Pet) {
    let value = serde_json::to_value(&stored_pet).expect("serialise pet");
    assert_eq!(
        value,
        json!({
            "id": PET,
            "userId": OWNER,
            "breedId": BREED,
            "name": "Rex",
            "size": "medium",
            "weight": 12.5,
            "weightMeasure": "kg",
            "adoptionDate": "2021-06-01",
            "birthdate": "2020-01-15",
            "castrated": true,
        })
    );
}

#[rstest]
fn pet_json_decodes_to_the_same_record(stored_pet: Pet) {
    let encoded = serde_json::to_string(&stored_pet).expect("serialise pet");
    let decoded: Pet = serde_json::from_str(&encoded).expect("deserialise pet");
    assert_eq!(decoded, stored_pet);
}

#[rstest]
fn pet_deserialisation_enforces_date_order(stored_pet: Pet) {
    let mut value = serde_json::to_value(&stored_pet).expect("serialise pet");
    value["adoptionDate"] = json!("2019-01-01");
    assert!(serde_json::from_value::<Pet>(value).is_err());
}
