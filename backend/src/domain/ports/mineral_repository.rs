//! Driven port for mineral record storage.
//!
//! The repository exposes the primitive reads the catalogue needs (exact
//! value filters, prefix and substring matches, distinct values) and a single
//! insert used by seeding. Slug resolution and ordering policy stay in the
//! domain service so every adapter behaves the same.

use async_trait::async_trait;

use crate::domain::{Mineral, MineralAttribute, MineralDraft, MineralId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by mineral repository adapters.
    pub enum MineralRepositoryError {
        /// Repository connection could not be established.
        Connection => "mineral repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query => "mineral repository query failed: {message}",
    }
}

/// Port for reading and seeding mineral records.
///
/// Every list method returns minerals ordered by name, then identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MineralRepository: Send + Sync {
    /// Fetch one mineral by identifier; `None` when absent.
    async fn find_by_id(&self, id: MineralId) -> Result<Option<Mineral>, MineralRepositoryError>;

    /// Minerals whose name starts with `prefix`, ignoring case.
    async fn list_by_name_prefix(
        &self,
        prefix: &str,
    ) -> Result<Vec<Mineral>, MineralRepositoryError>;

    /// Minerals whose `attribute` equals one of `values` exactly.
    async fn list_by_attribute_values(
        &self,
        attribute: MineralAttribute,
        values: &[String],
    ) -> Result<Vec<Mineral>, MineralRepositoryError>;

    /// Minerals where any searchable attribute contains `term`, ignoring case.
    ///
    /// `term` is matched literally; pattern metacharacters carry no meaning.
    async fn search(&self, term: &str) -> Result<Vec<Mineral>, MineralRepositoryError>;

    /// Distinct values of `attribute` across all minerals, in any order.
    async fn distinct_values(
        &self,
        attribute: MineralAttribute,
    ) -> Result<Vec<String>, MineralRepositoryError>;

    /// Number of stored minerals.
    async fn count(&self) -> Result<u64, MineralRepositoryError>;

    /// The mineral at `offset` in identifier order; `None` past the end.
    async fn nth(&self, offset: u64) -> Result<Option<Mineral>, MineralRepositoryError>;

    /// Store a new mineral.
    ///
    /// Returns `None` without error when a mineral with the same name already
    /// exists, so reseeding is idempotent.
    async fn insert(&self, draft: &MineralDraft)
    -> Result<Option<Mineral>, MineralRepositoryError>;
}
