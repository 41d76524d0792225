//! Error types for the venues SDK

use thiserror::Error;

/// Result type for venues operations
pub type Result<T> = std::result::Result<T, VenuesError>;

/// Venues SDK errors
#[derive(Error, Debug)]
pub enum VenuesError {
    #[error("Unknown type: {key}")]
    UnknownType { key: String },

    #[error("Type already registered: {id}")]
    AlreadyRegistered { id: String },

    #[error("Slug already registered: {slug}")]
    DuplicateSlug { slug: String },

    #[error("Invalid field type: {0}")]
    InvalidFieldType(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(#[from] semver::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),
}
