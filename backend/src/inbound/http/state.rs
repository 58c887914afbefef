//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! port and the page renderer, so they can be exercised with any repository.

use std::sync::Arc;

use crate::domain::ports::MineralCatalogue;
use crate::inbound::http::templates::PageRenderer;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Catalogue use-cases.
    pub catalogue: Arc<dyn MineralCatalogue>,
    /// Compiled page templates.
    pub pages: Arc<PageRenderer>,
}

impl HttpState {
    /// Bundle the catalogue port with a renderer.
    pub fn new(catalogue: Arc<dyn MineralCatalogue>, pages: Arc<PageRenderer>) -> Self {
        Self { catalogue, pages }
    }
}
