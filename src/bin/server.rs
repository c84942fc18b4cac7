//! trackdock Server Binary
//!
//! Starts the TCP server for trackdock.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use trackdock::catalog::{self, CatalogStore};
use trackdock::network::Server;
use trackdock::Config;

/// trackdock Server
#[derive(Parser, Debug)]
#[command(name = "trackdock-server")]
#[command(about = "Local audio catalog and streaming server")]
#[command(version)]
struct Args {
    /// Media directory holding .mp3 files and their .json sidecars
    #[arg(short, long, default_value = "./music")]
    media_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,trackdock=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("trackdock Server v{}", trackdock::VERSION);
    tracing::info!("Media directory: {}", args.media_dir);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .media_dir(&args.media_dir)
        .listen_addr(&args.listen)
        .build();

    // Populate the catalog before accepting any connection. A failed scan
    // is non-fatal; the server starts with an empty catalog.
    let store = Arc::new(CatalogStore::new());
    if let Err(e) = catalog::reload(&store, &config) {
        tracing::error!("Failed to load track catalog: {}", e);
    }

    let server = match Server::bind(config, store) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to bind listener: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
