//! Percent-encoding of query keys and values
//!
//! Everything except ASCII alphanumerics and `-_.~` is written as `%XX`
//! with uppercase hex, so the output never carries a literal space.

use std::borrow::Cow;

/// Percent-encode a single key or value
pub fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Encode and join a `key=value` pair
pub fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", encode(key), encode(value))
}

/// Decode a percent-encoded value; invalid UTF-8 is replaced lossily
pub fn decode(value: &str) -> String {
    let bytes = urlencoding::decode_binary(value.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
