//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod mineral_catalogue;
mod mineral_repository;

pub use mineral_catalogue::{CatalogueNavigation, MineralCatalogue};
#[cfg(test)]
pub use mineral_repository::MockMineralRepository;
pub use mineral_repository::{MineralRepository, MineralRepositoryError};
