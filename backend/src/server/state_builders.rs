//! Builders wiring the catalogue service to the configured store.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use crate::domain::MineralCatalogueService;
use crate::domain::ports::MineralCatalogue;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::templates::PageRenderer;
use crate::outbound::memory::InMemoryMineralRepository;
use crate::outbound::persistence::DieselMineralRepository;

use super::ServerConfig;

/// Pick the repository adapter: PostgreSQL when a pool is configured,
/// otherwise the in-memory store.
fn build_catalogue(config: &ServerConfig) -> Arc<dyn MineralCatalogue> {
    match (&config.db_pool, &config.memory_store) {
        (Some(pool), _) => {
            info!(store = "postgres", "serving mineral catalogue");
            Arc::new(MineralCatalogueService::new(Arc::new(
                DieselMineralRepository::new(pool.clone()),
            )))
        }
        (None, Some(store)) => {
            info!(store = "memory", minerals = store.len(), "serving mineral catalogue");
            Arc::new(MineralCatalogueService::new(Arc::clone(store)))
        }
        (None, None) => {
            info!(store = "memory", minerals = 0, "serving empty mineral catalogue");
            Arc::new(MineralCatalogueService::new(Arc::new(
                InMemoryMineralRepository::new(),
            )))
        }
    }
}

/// Build the shared HTTP state for `config`.
///
/// # Errors
/// Returns [`std::io::Error`] when the embedded templates fail to compile.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let pages = PageRenderer::new(config.static_url.clone())
        .map_err(|e| std::io::Error::other(format!("template compilation failed: {e}")))?;
    Ok(web::Data::new(HttpState::new(
        build_catalogue(config),
        Arc::new(pages),
    )))
}
