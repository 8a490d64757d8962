//! Magazine entity.
//!
//! # Responsibility
//! - Carry the magazine record with its two independently mutable fields.
//!
//! # Invariants
//! - `name` stays within [`MAGAZINE_NAME_CHARS`] at all times.
//! - `category` is never empty.
//! - A failed reassignment leaves the prior valid value in place.

use crate::model::{ValidationError, MAGAZINE_NAME_CHARS};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Kind-typed stable identifier for a [`Magazine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MagazineId(Uuid);

impl MagazineId {
    /// Wraps an externally-provided UUID, e.g. from a deserialized payload.
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    pub(crate) fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub(crate) fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Display for MagazineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Leaf entity: a publication that articles appear in.
///
/// Both fields are shared mutable state: a successful reassignment is
/// visible immediately to every holder of the magazine's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MagazineWire")]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates a magazine with a fresh id.
    ///
    /// Validates `name` first, then `category`; the first failing field
    /// decides the error.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(MagazineId::random(), name, category)
    }

    /// Creates a magazine with a caller-provided id.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `MagazineNameLength` when `name` is outside the allowed range.
    /// - `MagazineCategoryEmpty` when `category` is empty.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NilId);
        }
        let name = name.into();
        validate_name(&name)?;
        let category = category.into();
        validate_category(&category)?;
        Ok(Self { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Reassigns the magazine name.
    ///
    /// # Errors
    /// - `MagazineNameLength` when the new value is outside the allowed
    ///   range; the prior name is kept.
    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_name(&value)?;
        self.name = value;
        Ok(())
    }

    /// Reassigns the magazine category.
    ///
    /// # Errors
    /// - `MagazineCategoryEmpty` when the new value is empty; the prior
    ///   category is kept.
    pub fn set_category(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_category(&value)?;
        self.category = value;
        Ok(())
    }
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    let (min, max) = MAGAZINE_NAME_CHARS;
    let chars = value.chars().count();
    if chars < min || chars > max {
        return Err(ValidationError::MagazineNameLength { chars });
    }
    Ok(())
}

fn validate_category(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MagazineCategoryEmpty);
    }
    Ok(())
}

#[derive(Deserialize)]
struct MagazineWire {
    id: MagazineId,
    name: String,
    category: String,
}

impl TryFrom<MagazineWire> for Magazine {
    type Error = ValidationError;

    fn try_from(value: MagazineWire) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.name, value.category)
    }
}
