//! Application settings loaded from an optional TOML file and the environment.
//!
//! Resolution order, later wins: built-in defaults, the TOML file named by
//! `DIGIMON_CONFIG` (default `./config.toml`, skipped when absent), then the
//! `DATABASE_URL` and `BIND_ADDR` environment variables.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use tracing::debug;

/// Default `SQLite` database, created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/digimon.sqlite?mode=rwc";
/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Runtime configuration for the service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SeaORM connection URL
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parses the bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr.parse().map_err(Error::from)
    }

    fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database_url = url;
        }
        if let Ok(addr) = std::env::var("BIND_ADDR") {
            self.bind_addr = addr;
        }
        self
    }
}

/// Parses configuration from a TOML string. Missing keys take defaults.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config: {e}"),
    })
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Loads the application configuration: file if present, then env overrides.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("DIGIMON_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let base = if Path::new(&path).exists() {
        load_config(&path)?
    } else {
        debug!("No config file at {}, using defaults", path);
        AppConfig::default()
    };
    Ok(base.apply_env())
}
