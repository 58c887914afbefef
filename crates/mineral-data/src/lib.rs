//! Seed data for the mineral catalogue.
//!
//! This crate reads the catalogue seed file: a JSON array of mineral objects
//! keyed by human-readable attribute names (`"image filename"`,
//! `"strunz classification"`, and so on). It is kept independent of backend
//! domain types so the seed format can evolve without touching the web layer.
//!
//! # Example
//!
//! ```
//! use mineral_data::SeedCatalogue;
//!
//! let json = r#"[
//!     {"name": "Abelsonite", "category": "Organic", "streak": "Pink"},
//!     {"name": "Acanthite", "category": "Sulfide", "crystal system": "Monoclinic"}
//! ]"#;
//!
//! let catalogue = SeedCatalogue::from_json(json).expect("valid seed file");
//! assert_eq!(catalogue.len(), 2);
//! assert_eq!(catalogue.minerals()[1].crystal_system, "Monoclinic");
//! assert_eq!(catalogue.minerals()[1].streak, "");
//! ```

mod catalogue;
mod error;
mod seed;

pub use catalogue::SeedCatalogue;
pub use error::SeedError;
pub use seed::MineralSeed;
