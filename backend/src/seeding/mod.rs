//! Startup wiring for catalogue seeding.

mod startup;

pub use startup::{StartupSeedingError, seed_minerals_on_startup};
