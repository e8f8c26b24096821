//! Error types for galaxy building
//!
//! Domain arithmetic never fails; these cover naming rules, input
//! validation at the front-end boundary and the persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for galaxy operations
pub type Result<T> = std::result::Result<T, GalaxyError>;

#[derive(Error, Debug)]
pub enum GalaxyError {
    /// A solar system or planet with this name already exists
    #[error("Name already used: {name}")]
    NameConflict { name: String },

    /// No entity with this name
    #[error("Not found: {name}")]
    NotFound { name: String },

    /// Rejected user input (non-numeric, non-positive or out of range)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The save file could not be read or written
    #[error("Storage unavailable: {path}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The save file is not a valid galaxy record
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The save file parsed but contradicts itself
    #[error("Corrupt galaxy record: {message}")]
    CorruptRecord { message: String },

    /// The configuration file could not be parsed
    #[error("Invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be rendered as TOML
    #[error("TOML serialization error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

impl GalaxyError {
    pub fn name_conflict(name: impl Into<String>) -> Self {
        GalaxyError::NameConflict { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        GalaxyError::NotFound { name: name.into() }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        GalaxyError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GalaxyError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }
}
