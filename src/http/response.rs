//! Response writer
//!
//! Status line and header emission, plus fixed-buffer body streaming.

use std::borrow::Cow;
use std::io::{Read, Write};

use crate::error::Result;

/// Response status codes used by the four routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Status {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
    InternalError = 500,
}

impl Status {
    /// Numeric status code
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Canonical reason phrase
    pub fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::InternalError => "Internal Server Error",
        }
    }
}

/// Write the status line and the fixed header set in one send
///
/// Every response carries `Content-Length`, `Connection: close`, and an
/// open CORS allow-origin header. Content-Length is final before the first
/// body byte.
pub fn write_head<W: Write>(
    writer: &mut W,
    status: Status,
    content_type: &str,
    content_length: u64,
) -> Result<()> {
    let mut head = format!("HTTP/1.1 {} {}\r\n", status.code(), status.reason());
    head.push_str(&format!("Content-Type: {}\r\n", with_charset(content_type)));
    head.push_str(&format!("Content-Length: {content_length}\r\n"));
    head.push_str("Connection: close\r\n");
    head.push_str("Access-Control-Allow-Origin: *\r\n");
    head.push_str("\r\n");

    writer.write_all(head.as_bytes())?;
    Ok(())
}

/// Send a complete in-memory body under the standard header contract
pub fn send_bytes<W: Write>(
    writer: &mut W,
    status: Status,
    content_type: &str,
    body: &[u8],
) -> Result<()> {
    write_head(writer, status, content_type, body.len() as u64)?;
    writer.write_all(body)?;
    writer.flush()?;
    Ok(())
}

/// Stream a body from `reader` after the head
///
/// Pulls bytes through a fixed-size intermediate buffer with sequential
/// blocking writes until end-of-file.
pub fn send_stream<W: Write, R: Read>(
    writer: &mut W,
    status: Status,
    content_type: &str,
    content_length: u64,
    reader: &mut R,
    buf_size: usize,
) -> Result<()> {
    write_head(writer, status, content_type, content_length)?;

    let mut buf = vec![0u8; buf_size];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n])?;
    }
    writer.flush()?;
    Ok(())
}

/// Append an explicit UTF-8 charset to text and JSON content types
fn with_charset(content_type: &str) -> Cow<'_, str> {
    let textual = content_type.starts_with("text/") || content_type == "application/json";
    if textual && !content_type.contains("charset") {
        Cow::Owned(format!("{content_type}; charset=utf-8"))
    } else {
        Cow::Borrowed(content_type)
    }
}
