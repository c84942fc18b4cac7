//! Configuration for trackdock
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a trackdock instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Catalog Configuration
    // -------------------------------------------------------------------------
    /// Directory holding `.mp3` payloads and their `.json` sidecars.
    /// Created on first load if it does not exist.
    pub media_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Maximum size of one request head (in bytes)
    pub max_request_bytes: usize,

    // -------------------------------------------------------------------------
    // Streaming Configuration
    // -------------------------------------------------------------------------
    /// Size of the fixed intermediate buffer used when streaming file bodies
    pub stream_buf_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from("./music"),
            listen_addr: "127.0.0.1:8080".to_string(),
            max_request_bytes: 8192,
            stream_buf_bytes: 8192,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the media directory (audio payloads + metadata sidecars)
    pub fn media_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.media_dir = path.into();
        self
    }

    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the maximum request head size (in bytes)
    pub fn max_request_bytes(mut self, bytes: usize) -> Self {
        self.config.max_request_bytes = bytes;
        self
    }

    /// Set the streaming buffer size (in bytes)
    pub fn stream_buf_bytes(mut self, bytes: usize) -> Self {
        self.config.stream_buf_bytes = bytes;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
