//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

use crate::inbound::http::templates::DEFAULT_STATIC_URL;
use crate::outbound::memory::InMemoryMineralRepository;
use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) memory_store: Option<Arc<InMemoryMineralRepository>>,
    pub(crate) static_url: String,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a configuration listening on `bind_addr`.
    ///
    /// Without a pool or memory store the catalogue starts empty.
    ///
    /// # Examples
    /// ```
    /// use mineral_catalog::server::ServerConfig;
    ///
    /// let config = ServerConfig::new("127.0.0.1:8080".parse().expect("socket address"))
    ///     .with_static_url("/assets/");
    /// assert_eq!(config.static_url(), "/assets/");
    /// ```
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            memory_store: None,
            static_url: DEFAULT_STATIC_URL.to_owned(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Serve the catalogue from PostgreSQL.
    ///
    /// Takes precedence over [`ServerConfig::with_memory_store`].
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Serve the catalogue from an in-process store.
    #[must_use]
    pub fn with_memory_store(mut self, store: Arc<InMemoryMineralRepository>) -> Self {
        self.memory_store = Some(store);
        self
    }

    /// Prefix for specimen image URLs.
    #[must_use]
    pub fn with_static_url(mut self, static_url: impl Into<String>) -> Self {
        self.static_url = static_url.into();
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured image prefix.
    #[must_use]
    pub fn static_url(&self) -> &str {
        &self.static_url
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }

    #[cfg(feature = "metrics")]
    /// Return the configured Prometheus middleware, if any.
    #[must_use]
    pub fn metrics(&self) -> Option<&PrometheusMetrics> {
        self.prometheus.as_ref()
    }
}
