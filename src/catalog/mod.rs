//! Catalog Module
//!
//! The in-memory directory of track records and the loader that builds it.
//!
//! ## Lifecycle
//! - Empty at process start
//! - Populated synchronously before the server accepts connections
//! - Replaced wholesale on `/reload`; never incrementally patched
//!
//! The sidecar metadata files on disk are the durable source of truth; the
//! in-memory catalog is a cache rebuilt from them (and from directory
//! contents) on each load.

mod track;
mod store;
mod loader;

pub use track::{SidecarMeta, Track, TrackSummary};
pub use store::CatalogStore;
pub use loader::{load_catalog, reload, MEDIA_EXT, SIDECAR_EXT};
