//! Driving port for catalogue browsing.
//!
//! Inbound adapters depend on [`MineralCatalogue`] only; the domain service
//! implements it over a [`super::MineralRepository`].

use async_trait::async_trait;

use crate::domain::{Error, ListFilter, Mineral, MineralAttribute, MineralId};

/// Slugs that populate the category and streak menus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogueNavigation {
    /// Unique sorted category slugs.
    pub categories: Vec<String>,
    /// Unique sorted streak slugs.
    pub streaks: Vec<String>,
}

/// Read-side use-cases for the catalogue.
#[async_trait]
pub trait MineralCatalogue: Send + Sync {
    /// Dispatch to the list operation selected by `filter`.
    async fn list(&self, filter: &ListFilter) -> Result<Vec<Mineral>, Error>;

    /// Minerals whose name starts with `letter`, ignoring case.
    async fn list_by_letter(&self, letter: &str) -> Result<Vec<Mineral>, Error>;

    /// Minerals whose category slugs to `slug`.
    async fn list_by_category(&self, slug: &str) -> Result<Vec<Mineral>, Error>;

    /// Minerals whose streak slugs to `slug`.
    async fn list_by_streak(&self, slug: &str) -> Result<Vec<Mineral>, Error>;

    /// Free-text search across the searchable attributes.
    async fn search(&self, term: &str) -> Result<Vec<Mineral>, Error>;

    /// One mineral, or [`crate::domain::ErrorCode::NotFound`].
    async fn find(&self, id: MineralId) -> Result<Mineral, Error>;

    /// Distinct values of `attribute`, sorted.
    async fn distinct_values(&self, attribute: MineralAttribute) -> Result<Vec<String>, Error>;

    /// Distinct non-empty slugs of `attribute`, sorted.
    async fn unique_sorted_slugs(&self, attribute: MineralAttribute)
    -> Result<Vec<String>, Error>;

    /// Category and streak menus.
    async fn navigation(&self) -> Result<CatalogueNavigation, Error>;

    /// A uniformly random mineral; `None` when the catalogue is empty.
    async fn pick_random(&self) -> Result<Option<Mineral>, Error>;
}
