//! Mineral seeding orchestration.
//!
//! Converts a validated seed catalogue into drafts and inserts them through
//! the repository port. Re-running against a populated store is harmless:
//! names already present are counted as skipped.

use std::sync::Arc;

use mineral_data::SeedCatalogue;
use thiserror::Error;

use crate::domain::MineralDraft;
use crate::domain::ports::{MineralRepository, MineralRepositoryError};

/// Result of applying a seed catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MineralSeedOutcome {
    /// Records newly inserted.
    pub inserted: usize,
    /// Records skipped because their name was already stored.
    pub skipped: usize,
}

/// Errors raised while applying seed data.
#[derive(Debug, Error)]
pub enum MineralSeedingError {
    /// Persistence adapter failed mid-run.
    #[error("mineral seeding failed at {name:?}: {source}")]
    Persistence {
        /// Name of the record being inserted.
        name: String,
        /// Underlying repository error.
        #[source]
        source: MineralRepositoryError,
    },
}

/// Service that inserts seed records.
#[derive(Clone)]
pub struct MineralSeeder<R> {
    repository: Arc<R>,
}

impl<R> MineralSeeder<R> {
    /// Create a seeder over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> MineralSeeder<R>
where
    R: MineralRepository,
{
    /// Insert every record of `catalogue`.
    ///
    /// # Errors
    ///
    /// Returns [`MineralSeedingError::Persistence`] on the first repository
    /// failure; records inserted before it stay stored.
    pub async fn seed(
        &self,
        catalogue: SeedCatalogue,
    ) -> Result<MineralSeedOutcome, MineralSeedingError> {
        let mut outcome = MineralSeedOutcome::default();
        for seed in catalogue.into_minerals() {
            let draft = MineralDraft::from(seed);
            let inserted = self.repository.insert(&draft).await.map_err(|source| {
                MineralSeedingError::Persistence {
                    name: draft.name.clone(),
                    source,
                }
            })?;
            if inserted.is_some() {
                outcome.inserted += 1;
            } else {
                outcome.skipped += 1;
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for seeding orchestration.

    use super::*;
    use crate::domain::ports::MockMineralRepository;
    use crate::domain::{Mineral, MineralId};

    const SEED_JSON: &str = r#"[
        {"name": " Aowan ", "category": "Organic", "streak": "light gray"},
        {"name": "Beeri", "category": "Organic", "streak": "haze"},
        {"name": "borkani", "category": "new", "streak": "light gray"}
    ]"#;

    fn catalogue() -> SeedCatalogue {
        SeedCatalogue::from_json(SEED_JSON).expect("seed catalogue should parse")
    }

    #[tokio::test]
    async fn seed_counts_inserted_and_skipped_records() {
        let mut repo = MockMineralRepository::new();
        repo.expect_insert().times(3).returning(|draft| {
            if draft.name == "Beeri" {
                Ok(None)
            } else {
                Ok(Some(Mineral::new(MineralId::new(1), draft.clone())))
            }
        });

        let outcome = MineralSeeder::new(Arc::new(repo))
            .seed(catalogue())
            .await
            .expect("seed succeeds");

        assert_eq!(
            outcome,
            MineralSeedOutcome {
                inserted: 2,
                skipped: 1
            }
        );
    }

    #[tokio::test]
    async fn seed_trims_names_before_insert() {
        let mut repo = MockMineralRepository::new();
        repo.expect_insert()
            .withf(|draft: &MineralDraft| draft.name == draft.name.trim())
            .times(3)
            .returning(|_| Ok(None));

        MineralSeeder::new(Arc::new(repo))
            .seed(catalogue())
            .await
            .expect("seed succeeds");
    }

    #[tokio::test]
    async fn seed_stops_on_first_failure() {
        let mut repo = MockMineralRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(MineralRepositoryError::connection("refused")));

        let error = MineralSeeder::new(Arc::new(repo))
            .seed(catalogue())
            .await
            .expect_err("seed fails");

        assert!(
            matches!(error, MineralSeedingError::Persistence { ref name, .. } if name == "Aowan")
        );
    }
}
