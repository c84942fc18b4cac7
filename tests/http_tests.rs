//! Tests for the request parser, router, and response writer
//!
//! These tests verify:
//! - Request-line tokenization and bounded head reads
//! - Range header extraction (start offset only)
//! - Route resolution and percent-decoding
//! - The fixed response header contract

use std::io::{Cursor, Read};

use trackdock::http::{
    percent_decode, read_request, resolve, send_bytes, send_stream, write_head, Route, Status,
};
use trackdock::TrackdockError;

// =============================================================================
// Helper Types
// =============================================================================

/// Yields one queued chunk per read call, then EOF
struct ChunkedReader {
    chunks: Vec<Vec<u8>>,
}

impl ChunkedReader {
    fn new(chunks: &[&[u8]]) -> Self {
        let mut chunks: Vec<Vec<u8>> = chunks.iter().map(|c| c.to_vec()).collect();
        chunks.reverse();
        Self { chunks }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self.chunks.pop() {
            Some(chunk) => {
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
            None => Ok(0),
        }
    }
}

// =============================================================================
// Request Parser Tests
// =============================================================================

#[test]
fn test_parse_request_line() {
    let raw = b"GET /catalog HTTP/1.1\r\nHost: localhost\r\n\r\n";
    let request = read_request(&mut Cursor::new(&raw[..]), 8192).unwrap();

    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/catalog");
    assert_eq!(request.version, "HTTP/1.1");
    assert_eq!(request.range_start, None);
}

#[test]
fn test_parse_head_split_across_reads() {
    let mut reader = ChunkedReader::new(&[
        &b"GET /str"[..],
        &b"eam/song HTTP/1.1\r\nRange: byt"[..],
        &b"es=100-\r\n\r\n"[..],
    ]);
    let request = read_request(&mut reader, 8192).unwrap();

    assert_eq!(request.path, "/stream/song");
    assert_eq!(request.range_start, Some(100));
}

#[test]
fn test_parse_head_without_terminator_at_eof() {
    let raw = b"GET /catalog HTTP/1.1\r\n";
    let request = read_request(&mut Cursor::new(&raw[..]), 8192).unwrap();

    assert_eq!(request.path, "/catalog");
}

#[test]
fn test_empty_request() {
    let result = read_request(&mut Cursor::new(&b""[..]), 8192);

    assert!(matches!(result, Err(TrackdockError::EmptyRequest)));
}

#[test]
fn test_malformed_request_line_is_bad_request() {
    let raw = b"NONSENSE\r\n\r\n";
    let result = read_request(&mut Cursor::new(&raw[..]), 8192);

    assert!(matches!(result, Err(TrackdockError::BadRequest(_))));
}

#[test]
fn test_oversized_head_is_bad_request() {
    let mut raw = b"GET /catalog HTTP/1.1\r\n".to_vec();
    raw.extend_from_slice(&vec![b'x'; 10_000]);
    let result = read_request(&mut Cursor::new(&raw[..]), 8192);

    assert!(matches!(result, Err(TrackdockError::BadRequest(_))));
}

#[test]
fn test_range_start_extracted() {
    let raw = b"GET /stream/x HTTP/1.1\r\nRange: bytes=4096-\r\n\r\n";
    let request = read_request(&mut Cursor::new(&raw[..]), 8192).unwrap();

    assert_eq!(request.range_start, Some(4096));
}

#[test]
fn test_range_end_is_ignored() {
    let raw = b"GET /stream/x HTTP/1.1\r\nRange: bytes=100-200\r\n\r\n";
    let request = read_request(&mut Cursor::new(&raw[..]), 8192).unwrap();

    assert_eq!(request.range_start, Some(100));
}

#[test]
fn test_unparseable_range_is_ignored() {
    for header in ["Range: bytes=-500", "Range: bytes=abc-"] {
        let raw = format!("GET /stream/x HTTP/1.1\r\n{header}\r\n\r\n");
        let request = read_request(&mut Cursor::new(raw.as_bytes()), 8192).unwrap();

        assert_eq!(request.range_start, None, "for header {header:?}");
    }
}

// =============================================================================
// Router Tests
// =============================================================================

#[test]
fn test_exact_routes() {
    assert_eq!(resolve("/catalog"), Route::Catalog);
    assert_eq!(resolve("/reload"), Route::Reload);
}

#[test]
fn test_prefix_routes_decode_the_id() {
    assert_eq!(
        resolve("/description/My+Song"),
        Route::Description {
            id: "My Song".to_string()
        }
    );
    assert_eq!(
        resolve("/stream/%2Fx"),
        Route::Stream {
            id: "/x".to_string()
        }
    );
}

#[test]
fn test_unknown_paths_fall_through() {
    assert_eq!(resolve("/"), Route::NotFound);
    assert_eq!(resolve("/catalogs"), Route::NotFound);
    assert_eq!(resolve("/stream"), Route::NotFound);
    assert_eq!(resolve("/favicon.ico"), Route::NotFound);
}

#[test]
fn test_percent_decode() {
    assert_eq!(percent_decode("My+Song"), "My Song");
    assert_eq!(percent_decode("%2Fx"), "/x");
    assert_eq!(percent_decode("Caf%C3%A9"), "Café");
    assert_eq!(percent_decode("plain"), "plain");
}

#[test]
fn test_percent_decode_malformed_escapes_pass_through() {
    // Lone or short trailing escape
    assert_eq!(percent_decode("abc%"), "abc%");
    assert_eq!(percent_decode("abc%4"), "abc%4");
    // Non-hex escape
    assert_eq!(percent_decode("a%ZZb"), "a%ZZb");
}

// =============================================================================
// Response Writer Tests
// =============================================================================

fn head_string(status: Status, content_type: &str, content_length: u64) -> String {
    let mut out = Vec::new();
    write_head(&mut out, status, content_type, content_length).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_head_contract() {
    let head = head_string(Status::Ok, "audio/mpeg", 1234);

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: audio/mpeg\r\n"));
    assert!(head.contains("Content-Length: 1234\r\n"));
    assert!(head.contains("Connection: close\r\n"));
    assert!(head.contains("Access-Control-Allow-Origin: *\r\n"));
    assert!(head.ends_with("\r\n\r\n"));
}

#[test]
fn test_charset_appended_to_textual_types() {
    assert!(head_string(Status::Ok, "application/json", 2)
        .contains("Content-Type: application/json; charset=utf-8\r\n"));
    assert!(head_string(Status::NotFound, "text/plain", 9)
        .contains("Content-Type: text/plain; charset=utf-8\r\n"));
    // Binary types are left alone
    assert!(head_string(Status::Ok, "audio/mpeg", 0).contains("Content-Type: audio/mpeg\r\n"));
    // An explicit charset is not doubled
    let head = head_string(Status::Ok, "text/plain; charset=utf-8", 0);
    assert_eq!(head.matches("charset").count(), 1);
}

#[test]
fn test_status_reasons() {
    assert_eq!(Status::Ok.code(), 200);
    assert_eq!(Status::BadRequest.reason(), "Bad Request");
    assert_eq!(Status::NotFound.reason(), "Not Found");
    assert_eq!(Status::InternalError.reason(), "Internal Server Error");
}

#[test]
fn test_send_bytes_writes_head_then_body() {
    let mut out = Vec::new();
    send_bytes(&mut out, Status::NotFound, "text/plain", b"Not Found").unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(text.contains("Content-Length: 9\r\n"));
    assert!(text.ends_with("\r\n\r\nNot Found"));
}

#[test]
fn test_send_stream_copies_through_small_buffer() {
    let payload: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    let mut out = Vec::new();
    send_stream(
        &mut out,
        Status::Ok,
        "audio/mpeg",
        payload.len() as u64,
        &mut Cursor::new(&payload),
        64,
    )
    .unwrap();

    let split = out.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
    assert_eq!(&out[split..], &payload[..]);
}
