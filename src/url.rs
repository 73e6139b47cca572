//! Compact URL encoding for structured values
//!
//! [`compress_object_for_url`] turns any serializable value into a token safe
//! to place in a URL path or query string. The encoding is, in order: compact
//! JSON, standard base64, zlib at the default level, URL-safe base64 with
//! padding kept, then a trailing `%21` (an escaped `!`).
//!
//! ```rust
//! use boundkit::url::{compress_object_for_url, decompress_object_from_url};
//! use serde_json::{json, Value};
//!
//! let token = compress_object_for_url(&json!({"foo": "bar"})).unwrap();
//! assert_eq!(token, "eJxLrfTKTTKyyPTP9MqMjPDMTAu0tQUASdgGyg==%21");
//!
//! let back: Value = decompress_object_from_url(&token).unwrap();
//! assert_eq!(back, json!({"foo": "bar"}));
//! ```

use std::io::{Read, Write};

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine as _;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

const TERMINATOR: &str = "%21";

/// Failure to encode or decode a URL token.
#[derive(Debug, Error)]
pub enum UrlError {
    /// The value could not be written or read as JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A base64 layer was malformed
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The zlib layer could not be processed
    #[error("zlib error: {0}")]
    Zlib(#[from] std::io::Error),

    /// The token does not end in `%21`
    #[error("token does not end with %21")]
    MissingTerminator,
}

/// Encode `value` as a URL token.
pub fn compress_object_for_url<T: Serialize + ?Sized>(value: &T) -> Result<String, UrlError> {
    let json = serde_json::to_string(value)?;
    let inner = STANDARD.encode(json);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(inner.as_bytes())?;
    let compressed = encoder.finish()?;

    let mut token = URL_SAFE.encode(compressed);
    token.push_str(TERMINATOR);
    Ok(token)
}

/// Decode a token produced by [`compress_object_for_url`].
pub fn decompress_object_from_url<T: DeserializeOwned>(token: &str) -> Result<T, UrlError> {
    let body = token
        .strip_suffix(TERMINATOR)
        .ok_or(UrlError::MissingTerminator)?;
    let compressed = URL_SAFE.decode(body)?;

    let mut inner = Vec::new();
    ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut inner)?;

    let json = STANDARD.decode(inner)?;
    Ok(serde_json::from_slice(&json)?)
}
