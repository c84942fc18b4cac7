//! TCP Server
//!
//! Accepts connections and hands each one to a detached handler thread.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::thread;

use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::error::Result;

use super::Connection;

/// TCP server for trackdock
pub struct Server {
    listener: TcpListener,
    store: Arc<CatalogStore>,
    config: Arc<Config>,
}

impl Server {
    /// Bind the listener without accepting yet
    pub fn bind(config: Config, store: Arc<CatalogStore>) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            store,
            config: Arc::new(config),
        })
    }

    /// The bound address (useful when binding to port 0 in tests)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever (blocking)
    ///
    /// One detached thread per connection — no cap, no queue, no pool.
    /// Accept errors are logged and the loop continues; nothing here
    /// terminates the process.
    pub fn run(&self) -> Result<()> {
        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::warn!("Failed to accept client connection: {}", e);
                    continue;
                }
            };

            let store = Arc::clone(&self.store);
            let config = Arc::clone(&self.config);

            thread::spawn(move || match Connection::new(stream, store, config) {
                Ok(conn) => {
                    tracing::info!("Client connected: {}", conn.peer_addr());
                    let peer = conn.peer_addr().to_string();
                    if let Err(e) = conn.handle() {
                        tracing::debug!("Connection from {} ended with error: {}", peer, e);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to set up connection: {}", e);
                }
            });
        }

        Ok(())
    }
}
