//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable registration/publication entry points for callers.
//! - Delegate all validation and id resolution to the catalog.
//!
//! # Invariants
//! - Diagnostic events carry ids and counts only, never field values.
//! - Errors pass through as [`CatalogError`](crate::registry::catalog::CatalogError)
//!   unchanged.

use crate::model::article::ArticleId;
use crate::model::author::AuthorId;
use crate::model::magazine::{Magazine, MagazineId};
use crate::registry::catalog::{Catalog, CatalogResult};
use log::info;

/// Use-case facade owning the catalog.
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    /// Creates a service over an existing catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Read access to the underlying catalog and its query surface.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consumes the service and releases the catalog.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Registers a new author.
    pub fn register_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let id = self.catalog.add_author(name)?;
        info!("event=author_registered module=service status=ok author_id={id}");
        Ok(id)
    }

    /// Registers a new magazine.
    pub fn register_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let id = self.catalog.add_magazine(name, category)?;
        info!("event=magazine_registered module=service status=ok magazine_id={id}");
        Ok(id)
    }

    /// Publishes a new article by `author` in `magazine`.
    ///
    /// Catalog-level failures (unknown ids, title bounds) propagate
    /// unchanged.
    pub fn publish_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        let id = self.catalog.add_article(author, magazine, title)?;
        info!(
            "event=article_published module=service status=ok article_id={id} \
             author_id={author} magazine_id={magazine}"
        );
        Ok(id)
    }

    /// Renames a magazine.
    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<()> {
        self.catalog.rename_magazine(id, name)?;
        info!("event=magazine_renamed module=service status=ok magazine_id={id}");
        Ok(())
    }

    /// Moves a magazine to a new category.
    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()> {
        self.catalog.recategorize_magazine(id, category)?;
        info!("event=magazine_recategorized module=service status=ok magazine_id={id}");
        Ok(())
    }

    /// Re-points an article at a different author.
    pub fn reassign_author(&mut self, article: ArticleId, author: AuthorId) -> CatalogResult<()> {
        self.catalog.reassign_author(article, author)?;
        info!(
            "event=article_reassigned module=service status=ok article_id={article} \
             author_id={author}"
        );
        Ok(())
    }

    /// Re-points an article at a different magazine.
    pub fn reassign_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> CatalogResult<()> {
        self.catalog.reassign_magazine(article, magazine)?;
        info!(
            "event=article_reassigned module=service status=ok article_id={article} \
             magazine_id={magazine}"
        );
        Ok(())
    }

    /// The magazine with the most published articles, if any articles
    /// exist.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        self.catalog.top_publisher()
    }
}
