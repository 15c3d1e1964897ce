//! Error types for Waymark

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaymarkError {
    // Store errors
    #[error("Storage failure for key '{key}': {reason}")]
    Store { key: String, reason: String },

    // Routing errors
    #[error("Route computation failed: {reason}")]
    Routing { reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, WaymarkError>;
