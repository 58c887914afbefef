//! Catalogue server entry-point: loads settings, prepares the store, and
//! serves the HTML pages.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use mineral_catalog::inbound::http::health::HealthState;
use mineral_catalog::outbound::memory::InMemoryMineralRepository;
use mineral_catalog::outbound::persistence::{DbPool, DieselMineralRepository, PoolConfig, migrate};
use mineral_catalog::seeding::seed_minerals_on_startup;
use mineral_catalog::server::{ServerConfig, create_server};
use mineral_catalog::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|e| io::Error::other(format!("load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| io::Error::other(format!("invalid bind address: {e}")))?;

    let config = ServerConfig::new(bind_addr).with_static_url(settings.static_url());
    let config = match settings.database_url() {
        Some(database_url) => with_database(config, &settings, database_url).await?,
        None => with_memory_store(config, &settings).await?,
    };

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting mineral catalogue");
    create_server(health_state, config)?.await
}

async fn with_database(
    config: ServerConfig,
    settings: &AppSettings,
    database_url: String,
) -> io::Result<ServerConfig> {
    let applied = migrate(database_url.clone())
        .await
        .map_err(|e| io::Error::other(format!("run migrations: {e}")))?;
    info!(applied, "database migrations complete");

    let mut pool_config = PoolConfig::new(database_url);
    if let Some(max_size) = settings.pool_max_size {
        pool_config = pool_config.with_max_size(max_size);
    }
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| io::Error::other(format!("create database pool: {e}")))?;

    seed_minerals_on_startup(settings, Arc::new(DieselMineralRepository::new(pool.clone())))
        .await
        .map_err(io::Error::other)?;
    Ok(config.with_db_pool(pool))
}

async fn with_memory_store(
    config: ServerConfig,
    settings: &AppSettings,
) -> io::Result<ServerConfig> {
    warn!("no database URL configured; using the in-memory store");
    let store = Arc::new(InMemoryMineralRepository::new());
    seed_minerals_on_startup(settings, Arc::clone(&store))
        .await
        .map_err(io::Error::other)?;
    Ok(config.with_memory_store(store))
}

#[cfg(feature = "metrics")]
fn make_metrics() -> io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("minerals")
        .endpoint("/metrics")
        .build()
        .map_err(|e| io::Error::other(format!("configure Prometheus metrics: {e}")))
}
