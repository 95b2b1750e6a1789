//! Error types for the cylprox crate
//!
//! Construction of a cylinder is the only fallible geometric operation. The
//! remaining variants belong to the configuration layer.

use thiserror::Error;

/// Main error type for the cylprox library
#[derive(Debug, Error)]
pub enum CylproxError {
    /// Cylinder dimensions or axis cannot describe a finite right cylinder
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Error when a file I/O operation fails
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error when a configuration document cannot be parsed
    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type for cylprox operations
pub type Result<T> = std::result::Result<T, CylproxError>;

impl From<serde_json::Error> for CylproxError {
    fn from(err: serde_json::Error) -> Self {
        CylproxError::ConfigError(err.to_string())
    }
}
