//! Application configuration.
//!
//! [`ConfigSettings`] is loaded via OrthoConfig from CLI flags, `ROSTER_*`
//! environment variables and configuration files. Unset values fall back to
//! the defaults of [`AppConfig`]. The resulting [`AppConfig`] is built once at
//! start-up and handed to the server explicitly.

use std::net::{Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 8080;
/// Database connection string used when none is configured.
pub const DEFAULT_DATABASE: &str = "postgres://localhost/app";

/// Resolved process configuration.
///
/// ## Invariants
/// A configuration is valid when `port` is non-zero and `database` is
/// non-empty; see [`AppConfig::is_valid`].
///
/// # Examples
/// ```
/// use roster::config::AppConfig;
///
/// let config = AppConfig::default();
/// assert_eq!(config.port, 8080);
/// assert!(config.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port the HTTP listener binds to.
    pub port: u16,
    /// Database connection string. Reserved; nothing connects to it yet.
    pub database: String,
    /// Enables verbose logging and the Swagger UI.
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_owned(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Return whether the configuration can be used to start the server.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.port > 0 && !self.database.is_empty()
    }

    /// Address the listener binds to: every interface on the configured port.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Layered configuration values read at start-up.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ConfigSettings {
    /// TCP port for the HTTP listener.
    pub port: Option<u16>,
    /// Database connection string.
    pub database: Option<String>,
    /// Enable debug mode.
    #[ortho_config(default = false)]
    pub debug: bool,
}

impl ConfigSettings {
    /// Return the configured port, falling back to the default.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured database string, falling back to the default.
    #[must_use]
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    /// Resolve the settings into the configuration used by the server.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            port: self.port(),
            database: self.database().to_owned(),
            debug: self.debug,
        }
    }
}
