//! Author entity.
//!
//! # Responsibility
//! - Carry the validated, immutable author identity record.
//!
//! # Invariants
//! - `name` is non-empty after trimming and never changes post-construction.
//! - `id` is stable and never reused for another author.

use crate::model::{ImmutableFieldError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Kind-typed stable identifier for an [`Author`].
///
/// A newtype rather than a bare UUID so an author id can never be passed
/// where a magazine or article id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(Uuid);

impl AuthorId {
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

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Leaf entity: a person who writes articles.
///
/// Authors hold no back-pointer to their articles; the portfolio is derived
/// by scanning the catalog's article registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorWire")]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Creates an author with a fresh id.
    ///
    /// # Errors
    /// - `AuthorNameEmpty` when `name` trims to the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(AuthorId::random(), name)
    }

    /// Creates an author with a caller-provided id.
    ///
    /// Used by deserialization and import paths where identity already
    /// exists externally.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `AuthorNameEmpty` when `name` trims to the empty string.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NilId);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::AuthorNameEmpty);
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always fails: the name is fixed at construction so relationship
    /// history keeps pointing at a stable identity.
    pub fn set_name(&mut self, _value: impl Into<String>) -> Result<(), ImmutableFieldError> {
        Err(ImmutableFieldError {
            entity: "author",
            field: "name",
        })
    }
}

#[derive(Deserialize)]
struct AuthorWire {
    id: AuthorId,
    name: String,
}

impl TryFrom<AuthorWire> for Author {
    type Error = ValidationError;

    fn try_from(value: AuthorWire) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.name)
    }
}
