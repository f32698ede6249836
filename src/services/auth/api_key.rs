//! `Authorization: ApiKey <key>` parsing - core logic.
//!
//! This module is "core-only": it does not know about Axum middleware, the
//! allowlist, or responses. Middleware calls `get_api_key` and decides what to
//! do with the result.

use axum::http::{HeaderMap, HeaderValue, header};

/// Scheme token expected in front of the key.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Read-only header lookup by case-insensitive name.
///
/// When a header was set more than once, implementations return the value
/// that was set last.
pub trait HeaderSource {
    fn header_bytes(&self, name: &str) -> Option<&[u8]>;
}

impl HeaderSource for HeaderMap {
    fn header_bytes(&self, name: &str) -> Option<&[u8]> {
        // Incoming requests are built with `append`; `get` would return the first value.
        self.get_all(name)
            .iter()
            .next_back()
            .map(HeaderValue::as_bytes)
    }
}

/// Extract the key from `Authorization: ApiKey <key>`.
///
/// - Split happens on the first space only; the remainder is returned verbatim
///   (later spaces included, nothing trimmed).
/// - The scheme match is case-sensitive.
/// - `"ApiKey "` yields an empty key; rejecting it is up to the caller.
pub fn get_api_key<H>(headers: &H) -> Result<&str, ApiKeyError>
where
    H: HeaderSource + ?Sized,
{
    let raw = headers
        .header_bytes(header::AUTHORIZATION.as_str())
        .filter(|v| !v.is_empty())
        .ok_or(ApiKeyError::NoAuthHeader)?;

    let value = std::str::from_utf8(raw).map_err(|_| ApiKeyError::MalformedHeader)?;

    let (scheme, key) = value
        .split_once(' ')
        .ok_or(ApiKeyError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME {
        return Err(ApiKeyError::MalformedHeader);
    }

    Ok(key)
}
