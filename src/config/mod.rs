//! Configuration loading for the application shell.

/// Database connection and table creation
pub mod database;

use std::path::Path;

use serde::Deserialize;

use crate::errors::{Error, Result};

/// Default expiry warning window, in days.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

/// Application configuration, loaded from an optional `config.toml` with
/// environment-variable overrides applied on top.
#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Database connection URL
    #[serde(default = "database::default_database_url")]
    pub database_url: String,
    /// How many days ahead the reminder scan warns about expiry
    #[serde(default = "default_expiry_window_days")]
    pub expiry_window_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: database::default_database_url(),
            expiry_window_days: DEFAULT_EXPIRY_WINDOW_DAYS,
        }
    }
}

const fn default_expiry_window_days() -> i64 {
    DEFAULT_EXPIRY_WINDOW_DAYS
}

/// Loads configuration from the given TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    let app_config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })?;
    Ok(app_config)
}

/// Loads the application configuration: `config.toml` if present, built-in
/// defaults otherwise, with `DATABASE_URL` taking precedence when set.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = if Path::new("config.toml").exists() {
        load_config("config.toml")?
    } else {
        tracing::debug!("No config.toml found; using defaults");
        AppConfig::default()
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database_url = url;
    }

    Ok(config)
}
