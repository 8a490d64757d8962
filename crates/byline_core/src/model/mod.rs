//! Domain model for the author/magazine/article relationship.
//!
//! # Responsibility
//! - Define the three entity records and their kind-typed ids.
//! - Enforce field constraints at construction and on every reassignment.
//!
//! # Invariants
//! - Every entity is identified by a stable, non-nil id newtype.
//! - A constructor or setter that fails leaves no partially-written state.
//! - `Author.name` and `Article.title` never change after construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article;
pub mod author;
pub mod magazine;

/// Inclusive bounds for `Magazine.name`, in Unicode scalar values.
pub const MAGAZINE_NAME_CHARS: (usize, usize) = (2, 16);
/// Inclusive bounds for `Article.title`, in Unicode scalar values.
pub const ARTICLE_TITLE_CHARS: (usize, usize) = (5, 50);

/// Field constraint failure raised at construction or reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An entity id must not be the nil UUID.
    NilId,
    /// Author name is empty after trimming whitespace.
    AuthorNameEmpty,
    /// Magazine name is outside the allowed character range.
    MagazineNameLength { chars: usize },
    /// Magazine category is empty.
    MagazineCategoryEmpty,
    /// Article title is outside the allowed character range.
    ArticleTitleLength { chars: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "entity id must not be nil"),
            Self::AuthorNameEmpty => {
                write!(f, "author name must contain non-whitespace characters")
            }
            Self::MagazineNameLength { chars } => {
                let (min, max) = MAGAZINE_NAME_CHARS;
                write!(
                    f,
                    "magazine name must be {min}..={max} characters, got {chars}"
                )
            }
            Self::MagazineCategoryEmpty => write!(f, "magazine category must not be empty"),
            Self::ArticleTitleLength { chars } => {
                let (min, max) = ARTICLE_TITLE_CHARS;
                write!(
                    f,
                    "article title must be {min}..={max} characters, got {chars}"
                )
            }
        }
    }
}

impl Error for ValidationError {}

/// Attempted write to a field that is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmutableFieldError {
    /// Entity kind the field belongs to, e.g. `"author"`.
    pub entity: &'static str,
    /// Field name, e.g. `"name"`.
    pub field: &'static str,
}

impl Display for ImmutableFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} is immutable and cannot be reassigned",
            self.entity, self.field
        )
    }
}

impl Error for ImmutableFieldError {}
