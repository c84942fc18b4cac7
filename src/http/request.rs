//! Request Parser
//!
//! Reads one HTTP request head from a connection and extracts the method,
//! path, version, and optional range start offset.

use std::io::Read;

use crate::error::{Result, TrackdockError};

/// Header line prefix announcing a byte-range request
const RANGE_PREFIX: &str = "Range: bytes=";

/// A parsed request head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub version: String,
    /// Start offset from a `Range: bytes=N-` header, if one was sent
    pub range_start: Option<u64>,
}

/// Read and parse one request head from the stream
///
/// Reads incrementally until the blank-line terminator or `max_len` bytes;
/// the head may arrive split across any number of reads. An oversized or
/// malformed head is a `BadRequest`; a connection closed before any byte
/// arrived is an `EmptyRequest`.
pub fn read_request<R: Read>(reader: &mut R, max_len: usize) -> Result<Request> {
    let head = read_head(reader, max_len)?;
    parse_head(&head)
}

/// Accumulate bytes until the `\r\n\r\n` terminator, EOF, or the size cap
fn read_head<R: Read>(reader: &mut R, max_len: usize) -> Result<Vec<u8>> {
    let mut head = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            if head.is_empty() {
                return Err(TrackdockError::EmptyRequest);
            }
            // Client closed without the blank-line terminator; parse what arrived.
            return Ok(head);
        }

        head.extend_from_slice(&chunk[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            return Ok(head);
        }
        if head.len() >= max_len {
            return Err(TrackdockError::BadRequest(format!(
                "request head exceeds {max_len} bytes"
            )));
        }
    }
}

/// Tokenize the request line and scan the header lines for a range start
fn parse_head(head: &[u8]) -> Result<Request> {
    let text = String::from_utf8_lossy(head);
    let request_line = text.lines().next().unwrap_or("");

    let mut parts = request_line.split_whitespace();
    let (method, path, version) = match (parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(p), Some(v)) => (m, p, v),
        _ => {
            return Err(TrackdockError::BadRequest(format!(
                "malformed request line: {request_line:?}"
            )))
        }
    };

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
        range_start: parse_range_start(&text),
    })
}

/// Extract the start offset from a `Range: bytes=N-` header line
///
/// Only the start-anchored form is honored; an end-of-range value after the
/// `-` is ignored. A missing or non-numeric start disables the range rather
/// than failing the request.
fn parse_range_start(text: &str) -> Option<u64> {
    for line in text.lines().skip(1) {
        let rest = match line.strip_prefix(RANGE_PREFIX) {
            Some(rest) => rest,
            None => continue,
        };

        // The '-' must be present; everything after it is parsed past but
        // never used.
        let digits = match rest.split_once('-') {
            Some((start, _)) => start,
            None => return None,
        };
        match digits.parse::<u64>() {
            Ok(start) => {
                tracing::debug!("Range request starting at: {}", start);
                return Some(start);
            }
            Err(_) => {
                tracing::debug!("Ignoring unparseable Range header: {:?}", line);
                return None;
            }
        }
    }
    None
}
