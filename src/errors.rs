//! Unified error type for the crate.
//!
//! Every fallible operation returns [`Result`]; storage failures, serialization
//! failures, and domain violations all converge here so callers at the UI
//! boundary can surface a single notification without retry logic.

use thiserror::Error;

/// Crate-wide error enum.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failure.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// Underlying database operation rejected.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (config file reads, backup files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable lookup failure.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Backup document (de)serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An update/lookup target does not exist.
    #[error("Item not found: {name}")]
    ItemNotFound {
        /// Name or id of the missing record
        name: String,
    },

    /// A quantity that must be finite and in range was not.
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected value
        quantity: f64,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
