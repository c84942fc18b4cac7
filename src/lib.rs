//! # trackdock
//!
//! A lightweight local audio catalog and streaming server:
//! - Scans a media directory of `.mp3` files paired with `.json` metadata sidecars
//! - Serves four plain-HTTP routes over TCP: catalog listing, per-track
//!   metadata, audio streaming with byte-offset resume, and catalog reload
//! - One detached thread per connection; each connection serves exactly one
//!   request and closes
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Acceptor                            │
//! │               (one thread per connection)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Request Parser                             │
//! │          (bounded head read, Range extraction)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Router                                  │
//! │   /catalog   /description/{id}   /stream/{id}   /reload     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Handlers   │◄────────►│   Catalog   │
//!   │ (streaming) │          │    Store    │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   Catalog   │
//!                           │   Loader    │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod catalog;
pub mod http;
pub mod handlers;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, TrackdockError};
pub use config::Config;
pub use catalog::CatalogStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of trackdock
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
