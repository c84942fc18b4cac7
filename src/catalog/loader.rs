//! Catalog Loader
//!
//! Scans the media directory, builds a fresh catalog, and synthesizes
//! missing metadata sidecars.
//!
//! ## Failure Policy
//! - Media directory missing → created, empty catalog (non-fatal)
//! - Sidecar parse error → defaults substituted, logged, scan continues
//! - Sidecar write failure → logged, track kept
//!
//! Nothing in this module terminates the process.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{Result, TrackdockError};

use super::store::CatalogStore;
use super::track::{SidecarMeta, Track};

// =============================================================================
// Filesystem Layout Constants
// =============================================================================

/// File extension that qualifies a directory entry as a track
pub const MEDIA_EXT: &str = "mp3";

/// Sidecar metadata extension, paired to the media file by filename stem
pub const SIDECAR_EXT: &str = "json";

// =============================================================================
// Loading
// =============================================================================

/// Scan the media directory and build a fresh catalog
///
/// Builds the new map without touching the store; later directory entries
/// with a colliding id silently overwrite earlier ones.
pub fn load_catalog(config: &Config) -> Result<BTreeMap<String, Track>> {
    let media_dir = &config.media_dir;

    if !media_dir.exists() {
        fs::create_dir_all(media_dir)?;
        tracing::info!("Created media directory: {}", media_dir.display());
        return Ok(BTreeMap::new());
    }

    let mut tracks = BTreeMap::new();

    for entry in fs::read_dir(media_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(MEDIA_EXT) {
            continue;
        }
        let id = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };

        let track = load_track(&path, id, media_dir);
        tracing::debug!("Loaded track: {} ({})", track.title, track.id);
        tracks.insert(track.id.clone(), track);
    }

    tracing::info!("Loaded {} tracks into catalog", tracks.len());
    Ok(tracks)
}

/// Rescan the media directory and install the result wholesale
///
/// The scan runs outside the store lock; only the final swap takes it.
/// A failed scan leaves the previous catalog in place.
pub fn reload(store: &CatalogStore, config: &Config) -> Result<usize> {
    let tracks = load_catalog(config)?;
    let count = tracks.len();
    store.replace(tracks);
    Ok(count)
}

/// Build one track record, overlaying or synthesizing its sidecar
fn load_track(path: &Path, id: String, media_dir: &Path) -> Track {
    let description_path = media_dir.join(format!("{id}.{SIDECAR_EXT}"));

    let mut track = Track {
        title: id.clone(),
        artist: "Unknown".to_string(),
        album: "Unknown".to_string(),
        duration: 0,
        filepath: path.to_path_buf(),
        description_path: description_path.clone(),
        id,
    };

    if description_path.exists() {
        match read_sidecar(&description_path) {
            Ok(meta) => {
                if let Some(title) = meta.title {
                    track.title = title;
                }
                if let Some(artist) = meta.artist {
                    track.artist = artist;
                }
                if let Some(album) = meta.album {
                    track.album = album;
                }
                if let Some(duration) = meta.duration {
                    track.duration = duration;
                }
            }
            Err(e) => {
                tracing::warn!("Error parsing {}: {}", description_path.display(), e);
            }
        }
    } else if let Err(e) = write_default_sidecar(&description_path, &track.id) {
        tracing::warn!(
            "Failed to create description file {}: {}",
            description_path.display(),
            e
        );
    }

    track
}

/// Parse a sidecar file into its optional metadata fields
fn read_sidecar(path: &Path) -> Result<SidecarMeta> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| TrackdockError::SidecarParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Persist a defaults-only sidecar for a track that has none (best-effort)
fn write_default_sidecar(path: &Path, id: &str) -> Result<()> {
    let meta = SidecarMeta::defaults_for(id);
    fs::write(path, serde_json::to_string_pretty(&meta)?)?;
    Ok(())
}
