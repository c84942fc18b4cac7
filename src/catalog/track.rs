//! Track records
//!
//! The catalog's data model: a full track record, the summary shape served
//! by the listing route, and the sidecar metadata wire format.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single track known to the catalog
///
/// `id` is the media filename without its extension and is the unique
/// catalog key. Text fields carry arbitrary Unicode.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Duration in seconds
    pub duration: u64,
    /// Path to the audio payload
    pub filepath: PathBuf,
    /// Path to the paired metadata sidecar
    pub description_path: PathBuf,
}

impl Track {
    /// The shape served by the catalog listing
    pub fn summary(&self) -> TrackSummary {
        TrackSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: self.album.clone(),
            duration: self.duration,
        }
    }
}

/// One element of the `/catalog` JSON array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: u64,
}

/// Wire shape of a `{id}.json` sidecar
///
/// All fields are optional on disk; absent fields fall back to the loader's
/// defaults. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SidecarMeta {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<u64>,
}

impl SidecarMeta {
    /// The sidecar synthesized for a track that has none on disk
    pub fn defaults_for(id: &str) -> Self {
        Self {
            title: Some(id.to_string()),
            artist: Some("Unknown".to_string()),
            album: Some("Unknown".to_string()),
            duration: Some(0),
        }
    }
}
