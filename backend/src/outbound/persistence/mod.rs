//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Row structs and schema definitions stay private to this module; the
//! repository converts them to domain types at the boundary.
//!
//! # Example
//!
//! ```ignore
//! use mineral_catalog::outbound::persistence::{DbPool, DieselMineralRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/minerals")).await?;
//! let repo = DieselMineralRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_mineral_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_mineral_repository::DieselMineralRepository;
pub use migrations::{MIGRATIONS, MigrationError, migrate, run_pending_migrations};
pub use pool::{DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
