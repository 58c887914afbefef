//! Startup seeding orchestration.

use std::sync::Arc;

use mineral_data::{SeedCatalogue, SeedError};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::MineralRepository;
use crate::domain::{MineralSeedOutcome, MineralSeeder, MineralSeedingError};
use crate::settings::AppSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed file could not be read or failed validation.
    #[error("seed file error: {0}")]
    SeedFile(#[from] SeedError),
    /// Persistence failed part-way through.
    #[error("mineral seeding error: {0}")]
    Seeding(#[from] MineralSeedingError),
}

/// Load the seed file into `repository` when seeding is enabled.
///
/// Returns `Ok(None)` when seeding is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use mineral_catalog::outbound::memory::InMemoryMineralRepository;
/// use mineral_catalog::seeding::seed_minerals_on_startup;
/// use mineral_catalog::settings::AppSettings;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = AppSettings {
///     host: None,
///     port: None,
///     database_url: None,
///     seed_enabled: false,
///     seed_path: None,
///     static_url: None,
///     pool_max_size: None,
/// };
/// let repository = Arc::new(InMemoryMineralRepository::new());
/// let outcome = seed_minerals_on_startup(&settings, repository).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_minerals_on_startup<R>(
    settings: &AppSettings,
    repository: Arc<R>,
) -> Result<Option<MineralSeedOutcome>, StartupSeedingError>
where
    R: MineralRepository,
{
    if !settings.is_seed_enabled() {
        info!(reason = "disabled", "mineral seeding skipped");
        return Ok(None);
    }

    let seed_path = settings.seed_path();
    let catalogue = SeedCatalogue::from_file(&seed_path)?;
    info!(
        path = %seed_path.display(),
        records = catalogue.len(),
        "seed file loaded"
    );

    let outcome = MineralSeeder::new(repository).seed(catalogue).await?;
    info!(
        inserted = outcome.inserted,
        skipped = outcome.skipped,
        "mineral seeding applied"
    );
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    //! Unit tests for startup seeding.

    use std::io::Write;
    use std::path::PathBuf;

    use rstest::{fixture, rstest};
    use tempfile::NamedTempFile;

    use super::*;
    use crate::outbound::memory::InMemoryMineralRepository;

    const SEED_JSON: &str = r#"[
        {"name": "Aowan", "category": "Organic", "streak": "light gray"},
        {"name": "Beeri", "category": "Organic", "streak": "haze"}
    ]"#;

    #[fixture]
    fn seed_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(SEED_JSON.as_bytes()).expect("write seed file");
        file
    }

    fn settings(enabled: bool, seed_path: PathBuf) -> AppSettings {
        AppSettings {
            host: None,
            port: None,
            database_url: None,
            seed_enabled: enabled,
            seed_path: Some(seed_path),
            static_url: None,
            pool_max_size: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_seeding_leaves_store_untouched(seed_file: NamedTempFile) {
        let repo = Arc::new(InMemoryMineralRepository::new());

        let outcome = seed_minerals_on_startup(
            &settings(false, seed_file.path().to_path_buf()),
            Arc::clone(&repo),
        )
        .await
        .expect("seeding succeeds");

        assert!(outcome.is_none());
        assert!(repo.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn reseeding_skips_existing_names(seed_file: NamedTempFile) {
        let repo = Arc::new(InMemoryMineralRepository::new());
        let settings = settings(true, seed_file.path().to_path_buf());

        let first = seed_minerals_on_startup(&settings, Arc::clone(&repo))
            .await
            .expect("first run");
        let second = seed_minerals_on_startup(&settings, Arc::clone(&repo))
            .await
            .expect("second run");

        assert_eq!(
            first,
            Some(MineralSeedOutcome {
                inserted: 2,
                skipped: 0
            })
        );
        assert_eq!(
            second,
            Some(MineralSeedOutcome {
                inserted: 0,
                skipped: 2
            })
        );
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn missing_seed_file_is_reported() {
        let repo = Arc::new(InMemoryMineralRepository::new());

        let error = seed_minerals_on_startup(
            &settings(true, PathBuf::from("/nonexistent-dir/minerals.json")),
            repo,
        )
        .await
        .expect_err("missing file");

        assert!(matches!(
            error,
            StartupSeedingError::SeedFile(SeedError::IoError { .. })
        ));
    }
}
