//! Pet data model.
//!
//! Value types validate themselves on construction; [`NewPet`] and
//! [`PetChanges`] are the only ways a payload reaches the usecase ports.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

mod validation;

pub use validation::{
    FieldRequirement, Optional, PetField, PetFields, PetValidationError, RawPetFields, Required,
};

/// Maximum number of characters in a pet name.
pub const PET_NAME_MAX: usize = 80;

/// Trimmed, non-empty pet name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PetName(String);

impl PetName {
    /// Validate and construct a [`PetName`]; surrounding whitespace is dropped.
    pub fn new(name: impl Into<String>) -> Result<Self, PetValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PetValidationError::EmptyName);
        }
        if trimmed.chars().count() > PET_NAME_MAX {
            return Err(PetValidationError::NameTooLong { max: PET_NAME_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PetName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PetName> for String {
    fn from(value: PetName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PetName {
    type Error = PetValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Size class of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSize {
    Small,
    Medium,
    Large,
    Giant,
}

impl PetSize {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Giant => "giant",
        }
    }
}

impl fmt::Display for PetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a size or unit string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised value: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for PetSize {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "giant" => Ok(Self::Giant),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

/// Unit a [`Weight`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightMeasure {
    Kg,
    Lb,
}

impl WeightMeasure {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }
}

impl fmt::Display for WeightMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightMeasure {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kg" => Ok(Self::Kg),
            "lb" => Ok(Self::Lb),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

/// Finite, strictly positive weight.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Validate and construct a [`Weight`].
    pub fn new(value: f64) -> Result<Self, PetValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PetValidationError::InvalidWeight);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Weight> for f64 {
    fn from(value: Weight) -> Self {
        value.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = PetValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated insert payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    owner: EntityId,
    fields: PetFields<Required>,
}

impl NewPet {
    /// Validate a creation payload.
    ///
    /// The owner is checked first, then the shared field rules.
    ///
    /// # Examples
    /// ```
    /// use petdex::domain::pet::{NewPet, PetField, PetValidationError, RawPetFields};
    ///
    /// let err = NewPet::validate(None, RawPetFields::default()).unwrap_err();
    /// assert_eq!(err, PetValidationError::MissingField { field: PetField::UserId });
    /// ```
    pub fn validate(
        owner: Option<String>,
        raw: RawPetFields,
    ) -> Result<Self, PetValidationError> {
        let owner = Required::apply(
            PetField::UserId,
            owner
                .map(|value| validation::parse_entity_id(PetField::UserId, value))
                .transpose()?,
        )?;
        let fields = PetFields::<Required>::validate(raw)?;
        Ok(Self { owner, fields })
    }

    /// Owning user.
    #[must_use]
    pub fn owner(&self) -> &EntityId {
        &self.owner
    }

    /// Validated pet attributes.
    #[must_use]
    pub fn fields(&self) -> &PetFields<Required> {
        &self.fields
    }
}

/// Validated partial update; at least one field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct PetChanges {
    fields: PetFields<Optional>,
}

impl PetChanges {
    /// Validate an update payload.
    pub fn validate(raw: RawPetFields) -> Result<Self, PetValidationError> {
        let fields = PetFields::<Optional>::validate(raw)?;
        if fields.is_empty() {
            return Err(PetValidationError::EmptyUpdate);
        }
        Ok(Self { fields })
    }

    /// Fields to overwrite.
    #[must_use]
    pub fn fields(&self) -> &PetFields<Optional> {
        &self.fields
    }
}

/// A stored pet record.
///
/// ## Invariants
/// - `adoption_date` is never before `birthdate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PetDto", into = "PetDto")]
pub struct Pet {
    id: EntityId,
    user_id: EntityId,
    breed_id: EntityId,
    name: PetName,
    size: PetSize,
    weight: Weight,
    weight_measure: WeightMeasure,
    adoption_date: NaiveDate,
    birthdate: NaiveDate,
    castrated: Option<bool>,
    available_to_adoption: Option<bool>,
    comorbidity: Option<String>,
}

impl Pet {
    /// Materialise a validated insert under a freshly assigned identifier.
    #[must_use]
    pub fn create(id: EntityId, new_pet: NewPet) -> Self {
        let NewPet { owner, fields } = new_pet;
        let PetFields {
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
        } = fields;
        Self {
            id,
            user_id: owner,
            breed_id,
            name,
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

    /// Return a copy with `changes` applied.
    ///
    /// The date rule is re-checked against the merged record because an
    /// update may move only one of the two dates.
    pub fn apply(&self, changes: PetChanges) -> Result<Self, PetValidationError> {
        let PetFields {
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
        } = changes.fields;

        let updated = Self {
            id: self.id,
            user_id: self.user_id,
            breed_id: breed_id.unwrap_or(self.breed_id),
            name: name.unwrap_or_else(|| self.name.clone()),
            size: size.unwrap_or(self.size),
            weight: weight.unwrap_or(self.weight),
            weight_measure: weight_measure.unwrap_or(self.weight_measure),
            adoption_date: adoption_date.unwrap_or(self.adoption_date),
            birthdate: birthdate.unwrap_or(self.birthdate),
            castrated: castrated.or(self.castrated),
            available_to_adoption: available_to_adoption.or(self.available_to_adoption),
            comorbidity: comorbidity.or_else(|| self.comorbidity.clone()),
        };
        validation::ensure_adopted_after_birth(updated.adoption_date, updated.birthdate)?;
        Ok(updated)
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Owning user.
    pub fn user_id(&self) -> &EntityId {
        &self.user_id
    }

    pub fn breed_id(&self) -> &EntityId {
        &self.breed_id
    }

    pub fn name(&self) -> &PetName {
        &self.name
    }

    pub fn size(&self) -> PetSize {
        self.size
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn weight_measure(&self) -> WeightMeasure {
        self.weight_measure
    }

    pub fn adoption_date(&self) -> NaiveDate {
        self.adoption_date
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    pub fn castrated(&self) -> Option<bool> {
        self.castrated
    }

    pub fn available_to_adoption(&self) -> Option<bool> {
        self.available_to_adoption
    }

    pub fn comorbidity(&self) -> Option<&str> {
        self.comorbidity.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PetDto {
    id: EntityId,
    user_id: EntityId,
    breed_id: EntityId,
    name: PetName,
    size: PetSize,
    weight: Weight,
    weight_measure: WeightMeasure,
    adoption_date: NaiveDate,
    birthdate: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    castrated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    available_to_adoption: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comorbidity: Option<String>,
}

impl From<Pet> for PetDto {
    fn from(value: Pet) -> Self {
        let Pet {
            id,
            user_id,
            breed_id,
            name,
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
            id,
            user_id,
            breed_id,
            name,
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

impl TryFrom<PetDto> for Pet {
    type Error = PetValidationError;

    fn try_from(value: PetDto) -> Result<Self, Self::Error> {
        let PetDto {
            id,
            user_id,
            breed_id,
            name,
            size,
            weight,
            weight_measure,
            adoption_date,
            birthdate,
            castrated,
            available_to_adoption,
            comorbidity,
        } = value;
        validation::ensure_adopted_after_birth(adoption_date, birthdate)?;
        Ok(Self {
            id,
            user_id,
            breed_id,
            name,
            size,
            weight,
            weight_measure,
            adoption_date,
            birthdate,
            castrated,
            available_to_adoption,
            comorbidity,
        })
    }
}

#[cfg(test)]
mod tests;
