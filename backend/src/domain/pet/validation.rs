//! Shared validation for pet payloads.
//!
//! Inserts and updates run through the same field rules. What differs is
//! whether an absent field is an error: [`Required`] demands every mandatory
//! field, [`Optional`] only checks the fields that are present. The rule
//! order is fixed (`userId`, `name`, `breedId`, `size`, `weight`,
//! `weightMeasure`, `adoptionDate`, `birthdate`, then the cross-field date
//! rule) and validation stops at the first violation.

use std::fmt;

use chrono::NaiveDate;

use super::{PetName, PetSize, Weight, WeightMeasure};
use crate::domain::EntityId;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Payload fields addressed by validation errors, named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetField {
    UserId,
    Name,
    BreedId,
    Size,
    Weight,
    WeightMeasure,
    AdoptionDate,
    Birthdate,
}

impl PetField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserId => "userId",
            Self::Name => "name",
            Self::BreedId => "breedId",
            Self::Size => "size",
            Self::Weight => "weight",
            Self::WeightMeasure => "weightMeasure",
            Self::AdoptionDate => "adoptionDate",
            Self::Birthdate => "birthdate",
        }
    }
}

impl fmt::Display for PetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain rule violations for pet payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PetValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: PetField },
    #[error("{field} must be a valid UUID")]
    InvalidId { field: PetField, value: String },
    #[error("name must not be empty")]
    EmptyName,
    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("size must be one of small, medium, large or giant")]
    UnknownSize { value: String },
    #[error("weight must be a positive number")]
    InvalidWeight,
    #[error("weightMeasure must be kg or lb")]
    UnknownWeightMeasure { value: String },
    #[error("{field} must be a date formatted as YYYY-MM-DD")]
    InvalidDate { field: PetField, value: String },
    #[error("adoptionDate must not precede birthdate")]
    AdoptionBeforeBirth,
    #[error("an update must change at least one field")]
    EmptyUpdate,
}

impl PetValidationError {
    /// Field the violation is attached to, if it concerns a single field.
    #[must_use]
    pub fn field(&self) -> Option<PetField> {
        match self {
            Self::MissingField { field }
            | Self::InvalidId { field, .. }
            | Self::InvalidDate { field, .. } => Some(*field),
            Self::EmptyName | Self::NameTooLong { .. } => Some(PetField::Name),
            Self::UnknownSize { .. } => Some(PetField::Size),
            Self::InvalidWeight => Some(PetField::Weight),
            Self::UnknownWeightMeasure { .. } => Some(PetField::WeightMeasure),
            Self::AdoptionBeforeBirth => Some(PetField::AdoptionDate),
            Self::EmptyUpdate => None,
        }
    }

    /// Offending raw value, when it is worth echoing back.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidId { value, .. }
            | Self::UnknownSize { value }
            | Self::UnknownWeightMeasure { value }
            | Self::InvalidDate { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Stable machine-readable reason.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::InvalidId { .. } => "invalid_uuid",
            Self::EmptyName => "empty_name",
            Self::NameTooLong { .. } => "name_too_long",
            Self::UnknownSize { .. } => "unknown_size",
            Self::InvalidWeight => "invalid_weight",
            Self::UnknownWeightMeasure { .. } => "unknown_weight_measure",
            Self::InvalidDate { .. } => "invalid_date",
            Self::AdoptionBeforeBirth => "adoption_before_birth",
            Self::EmptyUpdate => "empty_update",
        }
    }
}

/// Decides what an absent field means for a validation pass.
pub trait FieldRequirement {
    /// Shape a validated field takes under this requirement.
    type Field<T: Clone + fmt::Debug + PartialEq>: Clone + fmt::Debug + PartialEq;

    /// Turn an optional, already format-checked value into the field shape.
    fn apply<T: Clone + fmt::Debug + PartialEq>(
        field: PetField,
        value: Option<T>,
    ) -> Result<Self::Field<T>, PetValidationError>;

    /// Borrow the value if it is known.
    fn known<T: Clone + fmt::Debug + PartialEq>(value: &Self::Field<T>) -> Option<&T>;
}

/// Every mandatory field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Required;

impl FieldRequirement for Required {
    type Field<T: Clone + fmt::Debug + PartialEq> = T;

    fn apply<T: Clone + fmt::Debug + PartialEq>(
        field: PetField,
        value: Option<T>,
    ) -> Result<T, PetValidationError> {
        value.ok_or(PetValidationError::MissingField { field })
    }

    fn known<T: Clone + fmt::Debug + PartialEq>(value: &T) -> Option<&T> {
        Some(value)
    }
}

/// Only present fields are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Optional;

impl FieldRequirement for Optional {
    type Field<T: Clone + fmt::Debug + PartialEq> = Option<T>;

    fn apply<T: Clone + fmt::Debug + PartialEq>(
        _field: PetField,
        value: Option<T>,
    ) -> Result<Option<T>, PetValidationError> {
        Ok(value)
    }

    fn known<T: Clone + fmt::Debug + PartialEq>(value: &Option<T>) -> Option<&T> {
        value.as_ref()
    }
}

/// Unvalidated pet fields as they arrive from an inbound adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPetFields {
    pub name: Option<String>,
    pub breed_id: Option<String>,
    pub size: Option<String>,
    pub weight: Option<f64>,
    pub weight_measure: Option<String>,
    pub adoption_date: Option<String>,
    pub birthdate: Option<String>,
    pub castrated: Option<bool>,
    pub available_to_adoption: Option<bool>,
    pub comorbidity: Option<String>,
}

/// Validated pet fields; `R` decides whether the mandatory ones may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct PetFields<R: FieldRequirement> {
    pub name: R::Field<PetName>,
    pub breed_id: R::Field<EntityId>,
    pub size: R::Field<PetSize>,
    pub weight: R::Field<Weight>,
    pub weight_measure: R::Field<WeightMeasure>,
    pub adoption_date: R::Field<NaiveDate>,
    pub birthdate: R::Field<NaiveDate>,
    pub castrated: Option<bool>,
    pub available_to_adoption: Option<bool>,
    pub comorbidity: Option<String>,
}

impl<R: FieldRequirement> PetFields<R> {
    /// Run the field rules over `raw`.
    pub fn validate(raw: RawPetFields) -> Result<Self, PetValidationError> {
        let RawPetFields {
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
        } = raw;

        let name = R::apply(PetField::Name, name.map(PetName::new).transpose()?)?;
        let breed_id = R::apply(
            PetField::BreedId,
            breed_id
                .map(|value| parse_entity_id(PetField::BreedId, value))
                .transpose()?,
        )?;
        let size = R::apply(
            PetField::Size,
            size.map(|value| {
                value
                    .parse::<PetSize>()
                    .map_err(|_| PetValidationError::UnknownSize { value })
            })
            .transpose()?,
        )?;
        let weight = R::apply(PetField::Weight, weight.map(Weight::new).transpose()?)?;
        let weight_measure = R::apply(
            PetField::WeightMeasure,
            weight_measure
                .map(|value| {
                    value
                        .parse::<WeightMeasure>()
                        .map_err(|_| PetValidationError::UnknownWeightMeasure { value })
                })
                .transpose()?,
        )?;
        let adoption_date = R::apply(
            PetField::AdoptionDate,
            adoption_date
                .map(|value| parse_date(PetField::AdoptionDate, value))
                .transpose()?,
        )?;
        let birthdate = R::apply(
            PetField::Birthdate,
            birthdate
                .map(|value| parse_date(PetField::Birthdate, value))
                .transpose()?,
        )?;

        if let (Some(adopted), Some(born)) = (R::known(&adoption_date), R::known(&birthdate)) {
            ensure_adopted_after_birth(*adopted, *born)?;
        }

        Ok(Self {
            name,
            breed_id,
            size,
            weight,
            weight_measure,
            adoption_date,
            birthdate,
            castrated,
            available_to_adoption,
            comorbidity: comorbidity
                .map(|text| text.trim().to_owned())
                .filter(|text| !text.is_empty()),
        })
    }
}

impl PetFields<Optional> {
    /// True when no field survived normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.breed_id.is_none()
            && self.size.is_none()
            && self.weight.is_none()
            && self.weight_measure.is_none()
            && self.adoption_date.is_none()
            && self.birthdate.is_none()
            && self.castrated.is_none()
            && self.available_to_adoption.is_none()
            && self.comorbidity.is_none()
    }
}

pub(crate) fn parse_entity_id(
    field: PetField,
    value: String,
) -> Result<EntityId, PetValidationError> {
    EntityId::parse(&value).map_err(|_| PetValidationError::InvalidId { field, value })
}

fn parse_date(field: PetField, value: String) -> Result<NaiveDate, PetValidationError> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map_err(|_| PetValidationError::InvalidDate { field, value })
}

pub(crate) fn ensure_adopted_after_birth(
    adopted: NaiveDate,
    born: NaiveDate,
) -> Result<(), PetValidationError> {
    if adopted < born {
        return Err(PetValidationError::AdoptionBeforeBirth);
    }
    Ok(())
}
