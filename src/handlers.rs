//! Route Handlers
//!
//! Produce and stream the response body for each resolved route. Catalog
//! lookups clone the record out of the store, so no catalog lock is held
//! while a body is being streamed.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

use crate::catalog::{self, CatalogStore};
use crate::config::Config;
use crate::error::Result;
use crate::http::{resolve, send_bytes, send_stream, Request, Route, Status};

/// UTF-8 byte-order mark some editors prepend to sidecar files
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Dispatch a parsed request to its route handler
pub fn dispatch<W: Write>(
    writer: &mut W,
    request: &Request,
    store: &CatalogStore,
    config: &Config,
) -> Result<()> {
    match resolve(&request.path) {
        Route::Catalog => list_catalog(writer, store),
        Route::Description { id } => track_description(writer, store, &id, config.stream_buf_bytes),
        Route::Stream { id } => {
            stream_track(writer, store, &id, request.range_start, config.stream_buf_bytes)
        }
        Route::Reload => reload_catalog(writer, store, config),
        Route::NotFound => not_found(writer),
    }
}

// =============================================================================
// Catalog Listing
// =============================================================================

/// `GET /catalog` — serialize every track summary as a JSON array
///
/// The snapshot is a single catalog generation, sorted by id.
pub fn list_catalog<W: Write>(writer: &mut W, store: &CatalogStore) -> Result<()> {
    let summaries = store.snapshot();
    let body = serde_json::to_vec(&summaries)?;
    send_bytes(writer, Status::Ok, "application/json", &body)
}

// =============================================================================
// Description Passthrough
// =============================================================================

/// `GET /description/{id}` — stream the sidecar bytes verbatim
///
/// A leading UTF-8 BOM is skipped and Content-Length adjusted to exclude it.
pub fn track_description<W: Write>(
    writer: &mut W,
    store: &CatalogStore,
    id: &str,
    buf_size: usize,
) -> Result<()> {
    let track = match store.lookup(id) {
        Some(track) => track,
        None => {
            return send_bytes(
                writer,
                Status::NotFound,
                "application/json",
                br#"{"error": "Track not found"}"#,
            )
        }
    };

    if !track.description_path.exists() {
        return send_bytes(
            writer,
            Status::NotFound,
            "application/json",
            br#"{"error": "Description file not found"}"#,
        );
    }

    let mut file = match File::open(&track.description_path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", track.description_path.display(), e);
            return send_bytes(
                writer,
                Status::InternalError,
                "application/json",
                br#"{"error": "Failed to open description file"}"#,
            );
        }
    };

    let file_size = file.metadata()?.len();

    let mut prefix = [0u8; 3];
    let n = file.read(&mut prefix)?;
    let offset = if n == 3 && prefix == UTF8_BOM { 3 } else { 0 };
    file.seek(SeekFrom::Start(offset))?;

    send_stream(
        writer,
        Status::Ok,
        "application/json",
        file_size - offset,
        &mut file,
        buf_size,
    )
}

// =============================================================================
// Audio Streaming
// =============================================================================

/// `GET /stream/{id}` — stream the audio payload from the requested offset
///
/// The start offset is clamped into `[0, file_size]`; a start past the end
/// yields an empty body. The status is always 200, never 206, even when a
/// range was honored.
pub fn stream_track<W: Write>(
    writer: &mut W,
    store: &CatalogStore,
    id: &str,
    range_start: Option<u64>,
    buf_size: usize,
) -> Result<()> {
    let track = match store.lookup(id) {
        Some(track) => track,
        None => return send_bytes(writer, Status::NotFound, "text/plain", b"Track not found"),
    };

    if !track.filepath.exists() {
        return send_bytes(writer, Status::NotFound, "text/plain", b"MP3 file not found");
    }

    let mut file = match File::open(&track.filepath) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", track.filepath.display(), e);
            return send_bytes(
                writer,
                Status::InternalError,
                "text/plain",
                b"Failed to open MP3 file",
            );
        }
    };

    let file_size = file.metadata()?.len();
    let start = range_start.unwrap_or(0).min(file_size);
    file.seek(SeekFrom::Start(start))?;

    send_stream(
        writer,
        Status::Ok,
        "audio/mpeg",
        file_size - start,
        &mut file,
        buf_size,
    )
}

// =============================================================================
// Reload
// =============================================================================

/// `GET /reload` — rescan the media directory and swap the catalog in
///
/// A failed scan is logged and keeps the previous catalog; the response
/// body is the same either way.
pub fn reload_catalog<W: Write>(
    writer: &mut W,
    store: &CatalogStore,
    config: &Config,
) -> Result<()> {
    match catalog::reload(store, config) {
        Ok(count) => tracing::info!("Catalog reloaded: {} tracks", count),
        Err(e) => tracing::warn!("Catalog reload failed: {}", e),
    }

    send_bytes(
        writer,
        Status::Ok,
        "application/json",
        br#"{"status": "Catalog reloaded"}"#,
    )
}

// =============================================================================
// Fallbacks
// =============================================================================

/// Generic 404 for unrouted paths
pub fn not_found<W: Write>(writer: &mut W) -> Result<()> {
    send_bytes(writer, Status::NotFound, "text/plain", b"Not Found")
}

/// 400 for heads that failed to parse
pub fn bad_request<W: Write>(writer: &mut W) -> Result<()> {
    send_bytes(writer, Status::BadRequest, "text/plain", b"Bad Request")
}
