//! Error types for the Benchboard core library.
//!
//! Uses `thiserror` for public API error types. Most page-level conditions
//! (a failed catalog fetch, too few models selected) are recovered inside the
//! controller and surface as status messages; these types cover what reaches
//! an API caller directly.

use std::path::PathBuf;

/// Top-level error type for the Benchboard core library.
#[derive(Debug, thiserror::Error)]
pub enum BenchboardError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from an asset catalog provider.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No catalog endpoint configured")]
    NotConfigured,

    #[error("Catalog request failed: {message}")]
    Request { message: String },

    #[error("Catalog service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Catalog response parse error: {message}")]
    Parse { message: String },
}

/// Errors from the configuration system.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Configuration parse error: {message}")]
    ParseError { message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}

/// Convenience result alias for Benchboard operations.
pub type Result<T> = std::result::Result<T, BenchboardError>;
