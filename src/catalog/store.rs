//! Catalog Store
//!
//! The one piece of shared mutable state: the id → track mapping.
//!
//! ## Concurrency Model
//!
//! A single `parking_lot::Mutex` guards the map. Locking discipline is
//! internal to the store: callers receive cloned records or whole-catalog
//! snapshots, never the guard itself, so every lock hold is short and no
//! lock is held across file or network I/O. Readers always observe one
//! catalog generation or the next, never a partially-installed state.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use super::track::{Track, TrackSummary};

/// Owned catalog service guarding the id → track mapping
///
/// The map is ordered by id, so `snapshot` yields a deterministic listing.
pub struct CatalogStore {
    tracks: Mutex<BTreeMap<String, Track>>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tracks: Mutex::new(BTreeMap::new()),
        }
    }

    /// Look up a track by id, cloning it out from under the lock
    pub fn lookup(&self, id: &str) -> Option<Track> {
        self.tracks.lock().get(id).cloned()
    }

    /// Copy every track summary out in one locked pass, sorted by id
    ///
    /// The whole vector comes from a single catalog generation: a concurrent
    /// `replace` is either fully visible or not visible at all.
    pub fn snapshot(&self) -> Vec<TrackSummary> {
        self.tracks.lock().values().map(Track::summary).collect()
    }

    /// Install a freshly-loaded catalog, discarding the previous one
    pub fn replace(&self, tracks: BTreeMap<String, Track>) {
        *self.tracks.lock() = tracks;
    }

    /// Number of tracks in the current catalog
    pub fn len(&self) -> usize {
        self.tracks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.lock().is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
