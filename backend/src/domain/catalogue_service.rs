//! Catalogue browsing service.
//!
//! Implements the [`MineralCatalogue`] driving port over any
//! [`MineralRepository`]. Category and streak indices are recomputed from the
//! store on every call; nothing is cached between requests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::domain::ports::{
    CatalogueNavigation, MineralCatalogue, MineralRepository, MineralRepositoryError,
};
use crate::domain::slug::{is_valid_slug, raw_values_for_slug, unique_sorted_slugs};
use crate::domain::{Error, ListFilter, Mineral, MineralAttribute, MineralId};

fn map_repository_error(error: MineralRepositoryError) -> Error {
    match error {
        MineralRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("mineral repository unavailable: {message}"))
        }
        MineralRepositoryError::Query { message } => {
            Error::internal(format!("mineral repository error: {message}"))
        }
    }
}

/// Catalogue service implementing [`MineralCatalogue`].
pub struct MineralCatalogueService<R> {
    repository: Arc<R>,
    rng: Mutex<SmallRng>,
}

impl<R> MineralCatalogueService<R> {
    /// Create a service whose random pick is seeded from system entropy.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_rng(repository, SmallRng::from_entropy())
    }

    /// Create a service with an explicit random source.
    pub fn with_rng(repository: Arc<R>, rng: SmallRng) -> Self {
        Self {
            repository,
            rng: Mutex::new(rng),
        }
    }

    fn random_offset(&self, count: u64) -> u64 {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        rng.gen_range(0..count)
    }
}

impl<R> MineralCatalogueService<R>
where
    R: MineralRepository,
{
    async fn list_by_slug(
        &self,
        attribute: MineralAttribute,
        slug: &str,
    ) -> Result<Vec<Mineral>, Error> {
        if !is_valid_slug(slug) {
            debug!(%attribute, slug, "rejecting non-canonical slug");
            return Ok(Vec::new());
        }
        let raw_values = self
            .repository
            .distinct_values(attribute)
            .await
            .map_err(map_repository_error)?;
        let matching = raw_values_for_slug(&raw_values, slug);
        if matching.is_empty() {
            debug!(%attribute, slug, "slug matches no stored value");
            return Ok(Vec::new());
        }
        self.repository
            .list_by_attribute_values(attribute, &matching)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> MineralCatalogue for MineralCatalogueService<R>
where
    R: MineralRepository,
{
    async fn list(&self, filter: &ListFilter) -> Result<Vec<Mineral>, Error> {
        match filter {
            ListFilter::Letter(letter) => self.list_by_letter(letter).await,
            ListFilter::Category(slug) => self.list_by_category(slug).await,
            ListFilter::Streak(slug) => self.list_by_streak(slug).await,
        }
    }

    async fn list_by_letter(&self, letter: &str) -> Result<Vec<Mineral>, Error> {
        self.repository
            .list_by_name_prefix(letter)
            .await
            .map_err(map_repository_error)
    }

    async fn list_by_category(&self, slug: &str) -> Result<Vec<Mineral>, Error> {
        self.list_by_slug(MineralAttribute::Category, slug).await
    }

    async fn list_by_streak(&self, slug: &str) -> Result<Vec<Mineral>, Error> {
        self.list_by_slug(MineralAttribute::Streak, slug).await
    }

    async fn search(&self, term: &str) -> Result<Vec<Mineral>, Error> {
        self.repository
            .search(term)
            .await
            .map_err(map_repository_error)
    }

    async fn find(&self, id: MineralId) -> Result<Mineral, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("mineral {id} not found")))
    }

    async fn distinct_values(&self, attribute: MineralAttribute) -> Result<Vec<String>, Error> {
        let mut values = self
            .repository
            .distinct_values(attribute)
            .await
            .map_err(map_repository_error)?;
        values.sort_unstable();
        values.dedup();
        Ok(values)
    }

    async fn unique_sorted_slugs(
        &self,
        attribute: MineralAttribute,
    ) -> Result<Vec<String>, Error> {
        let values = self.distinct_values(attribute).await?;
        let mut slugs = unique_sorted_slugs(&values);
        slugs.retain(|slug| !slug.is_empty());
        Ok(slugs)
    }

    async fn navigation(&self) -> Result<CatalogueNavigation, Error> {
        Ok(CatalogueNavigation {
            categories: self.unique_sorted_slugs(MineralAttribute::Category).await?,
            streaks: self.unique_sorted_slugs(MineralAttribute::Streak).await?,
        })
    }

    async fn pick_random(&self) -> Result<Option<Mineral>, Error> {
        let count = self
            .repository
            .count()
            .await
            .map_err(map_repository_error)?;
        if count == 0 {
            return Ok(None);
        }
        let offset = self.random_offset(count);
        self.repository
            .nth(offset)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;
