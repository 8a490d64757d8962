//! Registry layer: append-only entity stores and relationship queries.
//!
//! # Responsibility
//! - Own every entity instance for the life of the process.
//! - Answer derived queries by scanning the article registry.
//!
//! # Invariants
//! - Registration is append-only; nothing is ever removed.
//! - Write paths validate through the model before any state is committed.
//! - Registry APIs return semantic errors (`AuthorNotFound`,
//!   `MagazineNotFound`, `ArticleNotFound`) in addition to model
//!   validation errors.

pub mod catalog;
