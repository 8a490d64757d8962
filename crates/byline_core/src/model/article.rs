//! Article entity: the join record of the model.
//!
//! # Responsibility
//! - Link exactly one author to exactly one magazine under a titled record.
//!
//! # Invariants
//! - `title` stays within [`ARTICLE_TITLE_CHARS`] and never changes after
//!   construction.
//! - `author`/`magazine` reassignment goes through the catalog, which checks
//!   that the target id is registered before calling into this module.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::{ImmutableFieldError, ValidationError, ARTICLE_TITLE_CHARS};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Kind-typed stable identifier for an [`Article`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(Uuid);

impl ArticleId {
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

impl Display for ArticleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Join entity: one author's titled contribution to one magazine.
///
/// An article only becomes visible to relationship queries once a catalog
/// has accepted it; a detached value constructed here participates in
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleWire")]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Creates an article with a fresh id.
    ///
    /// # Errors
    /// - `ArticleTitleLength` when `title` is outside the allowed range.
    pub fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(ArticleId::random(), author, magazine, title)
    }

    /// Creates an article with a caller-provided id.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `ArticleTitleLength` when `title` is outside the allowed range.
    pub fn with_id(
        id: ArticleId,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NilId);
        }
        let title = title.into();
        let chars = title.chars().count();
        let (min, max) = ARTICLE_TITLE_CHARS;
        if chars < min || chars > max {
            return Err(ValidationError::ArticleTitleLength { chars });
        }
        Ok(Self {
            id,
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Always fails: the title is fixed at construction.
    pub fn set_title(&mut self, _value: impl Into<String>) -> Result<(), ImmutableFieldError> {
        Err(ImmutableFieldError {
            entity: "article",
            field: "title",
        })
    }

    // Re-pointing drops the prior reference; no history is retained.
    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}

#[derive(Deserialize)]
struct ArticleWire {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl TryFrom<ArticleWire> for Article {
    type Error = ValidationError;

    fn try_from(value: ArticleWire) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.author, value.magazine, value.title)
    }
}
