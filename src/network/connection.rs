//! Connection Handler
//!
//! Serves exactly one request per accepted connection: parse → route →
//! handle → close.

use std::net::TcpStream;
use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::error::{Result, TrackdockError};
use crate::handlers;
use crate::http::read_request;

/// Handles a single client connection
pub struct Connection {
    /// The TCP stream, read for the request head and written for the response
    stream: TcpStream,

    /// Shared catalog store
    store: Arc<CatalogStore>,

    /// Shared server configuration
    config: Arc<Config>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream, store: Arc<CatalogStore>, config: Arc<Config>) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        Ok(Self {
            stream,
            store,
            config,
            peer_addr,
        })
    }

    /// Serve the one request this connection carries
    ///
    /// The stream is dropped (and the connection closed) on return. A
    /// client that sends nothing is abandoned without a response; a head
    /// that fails to parse gets a 400.
    pub fn handle(mut self) -> Result<()> {
        let request = match read_request(&mut self.stream, self.config.max_request_bytes) {
            Ok(request) => request,
            Err(TrackdockError::EmptyRequest) => {
                tracing::debug!("Client {} sent no data", self.peer_addr);
                return Ok(());
            }
            Err(TrackdockError::BadRequest(reason)) => {
                tracing::debug!("Bad request from {}: {}", self.peer_addr, reason);
                return handlers::bad_request(&mut self.stream);
            }
            Err(e) => return Err(e),
        };

        tracing::info!("Request: {} {}", request.method, request.path);

        handlers::dispatch(&mut self.stream, &request, &self.store, &self.config)
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
