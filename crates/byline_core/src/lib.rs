//! Core domain logic for byline: authors, magazines, and the articles
//! that join them. This crate is the single source of truth for business
//! invariants.

pub mod logging;
pub mod model;
pub mod registry;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::{ImmutableFieldError, ValidationError};
pub use registry::catalog::{Catalog, CatalogError, CatalogResult};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, Catalog};

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn fresh_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.authors().is_empty());
        assert!(catalog.magazines().is_empty());
        assert!(catalog.articles().is_empty());
        assert!(catalog.top_publisher().is_none());
    }
}
