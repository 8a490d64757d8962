//! Catalog: the explicit registry object backing all relationship queries.
//!
//! # Responsibility
//! - Register authors, magazines and articles into append-only stores.
//! - Gate every mutation behind model validation and id resolution.
//! - Derive portfolio/contributor/top-publisher views by linear scan.
//!
//! # Invariants
//! - Every registered article references a registered author and magazine.
//! - Insertion order is stable; queries report articles in that order.
//! - A failing operation commits nothing; prior valid state survives.
//!
//! Queries rescan the stores on every call; there is no cache to
//! invalidate after a mutation.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::ValidationError;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// An author must have strictly more than this many articles in a magazine
/// to count as one of its contributing authors.
const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Registry-level error for registration, mutation and lookup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A field value failed model validation.
    Validation(ValidationError),
    /// The referenced author was never registered.
    AuthorNotFound(AuthorId),
    /// The referenced magazine was never registered.
    MagazineNotFound(MagazineId),
    /// The referenced article was never registered.
    ArticleNotFound(ArticleId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Append-only entity stores plus the derived relationship queries.
///
/// One catalog is constructed by the hosting application (or one per test)
/// and passed to all operations; there is no process-wide singleton.
#[derive(Debug, Default)]
pub struct Catalog {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new author.
    ///
    /// # Errors
    /// - `Validation(AuthorNameEmpty)` when the name trims to empty.
    pub fn add_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let author = Author::new(name)?;
        let id = author.id();
        self.authors.push(author);
        Ok(id)
    }

    /// Registers a new magazine.
    ///
    /// # Errors
    /// - `Validation(MagazineNameLength | MagazineCategoryEmpty)`, name
    ///   checked first.
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        let id = magazine.id();
        self.magazines.push(magazine);
        Ok(id)
    }

    /// Registers a new article linking `author` to `magazine`.
    ///
    /// Appending here is the only way an article becomes visible to
    /// queries. A failing call appends nothing.
    ///
    /// # Errors
    /// - `AuthorNotFound` / `MagazineNotFound` when either id is
    ///   unregistered.
    /// - `Validation(ArticleTitleLength)` when the title is out of range.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.require_author(author)?;
        self.require_magazine(magazine)?;
        let article = Article::new(author, magazine, title)?;
        let id = article.id();
        self.articles.push(article);
        Ok(id)
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id() == id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|magazine| magazine.id() == id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id() == id)
    }

    /// All registered authors, in registration order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All registered magazines, in registration order.
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    /// All registered articles, in registration order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Renames a magazine, effective immediately for all queries.
    ///
    /// # Errors
    /// - `MagazineNotFound` when `id` is unregistered.
    /// - `Validation(MagazineNameLength)`; the prior name is kept.
    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<()> {
        let magazine = self
            .magazines
            .iter_mut()
            .find(|magazine| magazine.id() == id)
            .ok_or(CatalogError::MagazineNotFound(id))?;
        magazine.set_name(name)?;
        Ok(())
    }

    /// Moves a magazine to a new category.
    ///
    /// # Errors
    /// - `MagazineNotFound` when `id` is unregistered.
    /// - `Validation(MagazineCategoryEmpty)`; the prior category is kept.
    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()> {
        let magazine = self
            .magazines
            .iter_mut()
            .find(|magazine| magazine.id() == id)
            .ok_or(CatalogError::MagazineNotFound(id))?;
        magazine.set_category(category)?;
        Ok(())
    }

    /// Re-points an article at a different registered author.
    ///
    /// Effective immediately for all subsequent queries; no history of the
    /// prior authorship is retained.
    ///
    /// # Errors
    /// - `AuthorNotFound` when `author` is unregistered; the article keeps
    ///   its prior author.
    /// - `ArticleNotFound` when `article` is unregistered.
    pub fn reassign_author(&mut self, article: ArticleId, author: AuthorId) -> CatalogResult<()> {
        self.require_author(author)?;
        let record = self
            .articles
            .iter_mut()
            .find(|candidate| candidate.id() == article)
            .ok_or(CatalogError::ArticleNotFound(article))?;
        record.set_author(author);
        Ok(())
    }

    /// Re-points an article at a different registered magazine.
    ///
    /// # Errors
    /// - `MagazineNotFound` when `magazine` is unregistered; the article
    ///   keeps its prior magazine.
    /// - `ArticleNotFound` when `article` is unregistered.
    pub fn reassign_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> CatalogResult<()> {
        self.require_magazine(magazine)?;
        let record = self
            .articles
            .iter_mut()
            .find(|candidate| candidate.id() == article)
            .ok_or(CatalogError::ArticleNotFound(article))?;
        record.set_magazine(magazine);
        Ok(())
    }

    /// All articles written by `author`, in insertion order.
    ///
    /// Empty for an unknown or article-less author, never an error.
    pub fn articles_by(&self, author: AuthorId) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| article.author() == author)
            .collect()
    }

    /// Distinct magazines `author` has written for, first-reference order.
    pub fn magazines_of(&self, author: AuthorId) -> Vec<&Magazine> {
        let mut seen = HashSet::new();
        let mut magazines = Vec::new();
        for article in self.articles.iter().filter(|a| a.author() == author) {
            if seen.insert(article.magazine()) {
                if let Some(magazine) = self.magazine(article.magazine()) {
                    magazines.push(magazine);
                }
            }
        }
        magazines
    }

    /// Distinct categories across the magazines `author` has written for.
    ///
    /// `None` when the author has no articles, never an empty container.
    /// Categories are read live, so a recategorized magazine shows its
    /// current category here.
    pub fn topic_areas(&self, author: AuthorId) -> Option<Vec<&str>> {
        let magazines = self.magazines_of(author);
        if magazines.is_empty() {
            return None;
        }
        let mut seen = HashSet::new();
        let mut areas = Vec::new();
        for magazine in magazines {
            if seen.insert(magazine.category()) {
                areas.push(magazine.category());
            }
        }
        Some(areas)
    }

    /// All articles published in `magazine`, in insertion order.
    pub fn articles_in(&self, magazine: MagazineId) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| article.magazine() == magazine)
            .collect()
    }

    /// Distinct authors who wrote for `magazine`, first-reference order.
    pub fn contributors(&self, magazine: MagazineId) -> Vec<&Author> {
        let mut seen = HashSet::new();
        let mut authors = Vec::new();
        for article in self.articles.iter().filter(|a| a.magazine() == magazine) {
            if seen.insert(article.author()) {
                if let Some(author) = self.author(article.author()) {
                    authors.push(author);
                }
            }
        }
        authors
    }

    /// Titles of all articles in `magazine`, matching `articles_in` order.
    ///
    /// `None` when the magazine has no articles, never an empty container.
    pub fn article_titles(&self, magazine: MagazineId) -> Option<Vec<&str>> {
        let titles: Vec<&str> = self
            .articles
            .iter()
            .filter(|article| article.magazine() == magazine)
            .map(|article| article.title())
            .collect();
        if titles.is_empty() {
            return None;
        }
        Some(titles)
    }

    /// Authors with strictly more than two articles in `magazine`,
    /// first-reference order.
    ///
    /// `None` when no author clears the threshold, never an empty
    /// container.
    pub fn contributing_authors(&self, magazine: MagazineId) -> Option<Vec<&Author>> {
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for article in self.articles.iter().filter(|a| a.magazine() == magazine) {
            match counts.iter_mut().find(|(id, _)| *id == article.author()) {
                Some((_, count)) => *count += 1,
                None => counts.push((article.author(), 1)),
            }
        }
        let authors: Vec<&Author> = counts
            .iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_THRESHOLD)
            .filter_map(|(id, _)| self.author(*id))
            .collect();
        if authors.is_empty() {
            return None;
        }
        Some(authors)
    }

    /// The magazine with the most articles.
    ///
    /// `None` when no article has ever been registered. Ties go to the
    /// first-registered magazine: the scan replaces the leader only on a
    /// strictly greater count.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        if self.articles.is_empty() {
            return None;
        }
        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in &self.magazines {
            let count = self
                .articles
                .iter()
                .filter(|article| article.magazine() == magazine.id())
                .count();
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((magazine, count));
            }
        }
        best.map(|(magazine, _)| magazine)
    }

    fn require_author(&self, id: AuthorId) -> CatalogResult<&Author> {
        self.author(id).ok_or(CatalogError::AuthorNotFound(id))
    }

    fn require_magazine(&self, id: MagazineId) -> CatalogResult<&Magazine> {
        self.magazine(id).ok_or(CatalogError::MagazineNotFound(id))
    }
}
