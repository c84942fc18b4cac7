//! HTTP Module
//!
//! A deliberately minimal HTTP/1.1 surface: one bounded request head per
//! connection, four routes, and a fixed response header contract.
//!
//! ## Request Format
//! ```text
//! METHOD SP PATH SP VERSION CRLF
//! (header lines) CRLF
//! CRLF
//! ```
//! The only header consulted is `Range: bytes=N-`; only the start offset is
//! honored. The method and version are never validated.
//!
//! ## Response Format
//! ```text
//! HTTP/1.1 STATUS REASON CRLF
//! Content-Type: ... CRLF
//! Content-Length: ... CRLF
//! Connection: close CRLF
//! Access-Control-Allow-Origin: * CRLF
//! CRLF
//! body
//! ```
//! Content-Length is always known before the first body byte; there is no
//! chunked transfer encoding and no keep-alive.

mod request;
mod response;
mod router;

pub use request::{read_request, Request};
pub use response::{send_bytes, send_stream, write_head, Status};
pub use router::{percent_decode, resolve, Route};
