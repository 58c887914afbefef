//! Load a mineral seed file into PostgreSQL.
//!
//! Applies pending migrations first, then inserts every record whose name is
//! not already stored.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use mineral_catalog::domain::MineralSeeder;
use mineral_catalog::outbound::persistence::{DbPool, DieselMineralRepository, PoolConfig, migrate};
use mineral_data::SeedCatalogue;
use tokio::runtime::Builder;

/// `seed-minerals` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-minerals",
    about = "Load a mineral seed file into the catalogue database",
    version
)]
struct CliArgs {
    /// Path to the JSON seed file.
    #[arg(long = "seed-path", value_name = "path")]
    seed_path: PathBuf,
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let catalogue = SeedCatalogue::from_file(&args.seed_path).map_err(io::Error::other)?;

    let database_url = resolve_database_url(args.database_url, env::var("DATABASE_URL").ok())?;
    migrate(database_url.clone())
        .await
        .map_err(|error| io::Error::other(format!("run migrations: {error}")))?;
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(1))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;

    let seeder = MineralSeeder::new(Arc::new(DieselMineralRepository::new(pool)));
    let outcome = seeder
        .seed(catalogue)
        .await
        .map_err(|error| io::Error::other(format!("seed minerals: {error}")))?;

    println!("inserted={}", outcome.inserted);
    println!("skipped={}", outcome.skipped);
    Ok(())
}

fn resolve_database_url(explicit: Option<String>, from_env: Option<String>) -> io::Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--database-url must not be empty when provided",
            ));
        }
        return Ok(value);
    }

    match from_env {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "DATABASE_URL must not be empty",
        )),
        None => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "database URL missing: set --database-url or DATABASE_URL",
        )),
    }
}
