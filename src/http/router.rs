//! Router
//!
//! Maps a request path to one of the four handlers. The request method is
//! never consulted.

/// The route resolved from a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/catalog` — JSON listing of every track
    Catalog,
    /// `/description/{id}` — sidecar metadata passthrough
    Description { id: String },
    /// `/stream/{id}` — audio payload, optionally range-resumed
    Stream { id: String },
    /// `/reload` — synchronous catalog rescan
    Reload,
    /// Any other path
    NotFound,
}

/// Resolve a request path to a route
///
/// `/catalog` and `/reload` match exactly; `/description/` and `/stream/`
/// match by prefix with the remainder percent-decoded as the track id.
pub fn resolve(path: &str) -> Route {
    match path {
        "/catalog" => Route::Catalog,
        "/reload" => Route::Reload,
        _ => {
            if let Some(encoded) = path.strip_prefix("/description/") {
                Route::Description {
                    id: percent_decode(encoded),
                }
            } else if let Some(encoded) = path.strip_prefix("/stream/") {
                Route::Stream {
                    id: percent_decode(encoded),
                }
            } else {
                Route::NotFound
            }
        }
    }
}

/// Decode percent-escapes and `+` in a path segment
///
/// `%XX` becomes the byte value and `+` a space. A `%` not followed by two
/// hex digits (including a lone `%` at the end of the segment) passes
/// through literally.
pub fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        decoded.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        decoded.push(b'%');
                        i += 1;
                    }
                }
            }
            b'%' => {
                decoded.push(b'%');
                i += 1;
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b => {
                decoded.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|v| v as u8)
}
