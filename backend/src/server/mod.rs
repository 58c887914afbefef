//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{App, HttpServer, web};

use crate::Trace;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::minerals;
use crate::inbound::http::state::HttpState;

/// Assemble the application: catalogue pages, health probes, request tracing
/// and trailing-slash normalisation.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use mineral_catalog::domain::MineralCatalogueService;
/// use mineral_catalog::inbound::http::health::HealthState;
/// use mineral_catalog::inbound::http::state::HttpState;
/// use mineral_catalog::inbound::http::templates::PageRenderer;
/// use mineral_catalog::outbound::memory::InMemoryMineralRepository;
/// use mineral_catalog::server::build_app;
///
/// let catalogue = MineralCatalogueService::new(Arc::new(InMemoryMineralRepository::new()));
/// let pages = PageRenderer::new("/static/").expect("templates compile");
/// let app = build_app(
///     web::Data::new(HealthState::new()),
///     web::Data::new(HttpState::new(Arc::new(catalogue), Arc::new(pages))),
/// );
/// ```
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .configure(minerals::configure)
        .service(ready)
        .service(live)
        .wrap(Trace)
        .wrap(NormalizePath::new(TrailingSlash::Always))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] naming the bind address, store and
///   optional metrics.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when the templates fail to compile or when
/// binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config)?;
    let ServerConfig {
        bind_addr,
        #[cfg(feature = "metrics")]
        prometheus,
        ..
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
