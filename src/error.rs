//! Error types for trackdock
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using TrackdockError
pub type Result<T> = std::result::Result<T, TrackdockError>;

/// Unified error type for trackdock operations
#[derive(Debug, Error)]
pub enum TrackdockError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The client connected but sent nothing before closing.
    /// The connection is abandoned without a response.
    #[error("Empty request")]
    EmptyRequest,

    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    #[error("Failed to parse sidecar {}: {source}", path.display())]
    SidecarParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
