//! Application settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `MINERALS_*` environment variables over
//! configuration files. Every field is optional; accessors supply defaults.

use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::templates::DEFAULT_STATIC_URL;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

fn default_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("minerals.json")
}

/// Runtime configuration for the catalogue server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MINERALS")]
pub struct AppSettings {
    /// Interface to bind.
    #[ortho_config(cli_short = 'H')]
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection URL; `DATABASE_URL` is used when unset.
    pub database_url: Option<String>,
    /// Load the seed file into the store on startup.
    #[ortho_config(default = false)]
    pub seed_enabled: bool,
    /// Seed file location.
    #[ortho_config(cli_short = 'S')]
    pub seed_path: Option<PathBuf>,
    /// Prefix for specimen image URLs.
    #[ortho_config(cli_short = 'u')]
    pub static_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(cli_short = 'P')]
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.as_deref().unwrap_or(DEFAULT_HOST).parse()?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Configured database URL, falling back to `DATABASE_URL`.
    ///
    /// Blank values count as unset.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env::var("DATABASE_URL").ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Whether startup seeding is enabled.
    pub fn is_seed_enabled(&self) -> bool {
        self.seed_enabled
    }

    /// Seed file path, defaulting to the bundled fixture.
    pub fn seed_path(&self) -> PathBuf {
        self.seed_path.clone().unwrap_or_else(default_seed_path)
    }

    /// Image prefix, defaulting to `/static/`.
    pub fn static_url(&self) -> &str {
        self.static_url.as_deref().unwrap_or(DEFAULT_STATIC_URL)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 8] = [
        "MINERALS_HOST",
        "MINERALS_PORT",
        "MINERALS_DATABASE_URL",
        "MINERALS_SEED_ENABLED",
        "MINERALS_SEED_PATH",
        "MINERALS_STATIC_URL",
        "MINERALS_POOL_MAX_SIZE",
        "DATABASE_URL",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("mineral-catalog")])
            .expect("config should load")
    }

    fn cleared_except(overrides: &[(&str, &str)]) -> Vec<(&'static str, Option<String>)> {
        VARS.into_iter()
            .map(|name| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| (*value).to_owned());
                (name, value)
            })
            .collect()
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(cleared_except(&[]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("socket address")
        );
        assert!(settings.database_url().is_none());
        assert!(!settings.is_seed_enabled());
        assert_eq!(settings.seed_path(), default_seed_path());
        assert_eq!(settings.static_url(), "/static/");
        assert!(settings.pool_max_size.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(cleared_except(&[
            ("MINERALS_HOST", "127.0.0.1"),
            ("MINERALS_PORT", "9000"),
            ("MINERALS_DATABASE_URL", "postgres://localhost/minerals"),
            ("MINERALS_SEED_ENABLED", "true"),
            ("MINERALS_SEED_PATH", "/tmp/minerals.json"),
            ("MINERALS_STATIC_URL", "/assets/"),
            ("MINERALS_POOL_MAX_SIZE", "4"),
            ("DATABASE_URL", "postgres://elsewhere/db"),
        ]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("address"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("socket address")
        );
        assert_eq!(
            settings.database_url().as_deref(),
            Some("postgres://localhost/minerals")
        );
        assert!(settings.is_seed_enabled());
        assert_eq!(settings.seed_path(), PathBuf::from("/tmp/minerals.json"));
        assert_eq!(settings.static_url(), "/assets/");
        assert_eq!(settings.pool_max_size, Some(4));
    }

    #[rstest]
    #[case(Some("postgres://fallback/db"), Some("postgres://fallback/db"))]
    #[case(Some("  "), None)]
    #[case(None, None)]
    fn database_url_falls_back_to_standard_variable(
        #[case] fallback: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let overrides: Vec<(&str, &str)> = fallback
            .map(|url| ("DATABASE_URL", url))
            .into_iter()
            .collect();
        let _guard = lock_env(cleared_except(&overrides));

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url().as_deref(), expected);
    }

    #[rstest]
    fn non_ip_host_is_rejected() {
        let _guard = lock_env(cleared_except(&[("MINERALS_HOST", "localhost")]));

        let settings = load_from_empty_args();
        assert!(settings.bind_addr().is_err());
    }
}
