/*
 * Responsibility
 * - The "authenticated caller" type handlers see
 * - The middleware builds it after the key is checked; handlers receive only this type
 */

/// Attached to requests that passed the API key middleware.
///
/// - `fingerprint` identifies the key in logs and responses without exposing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyCtx {
    pub fingerprint: String,
}

impl ApiKeyCtx {
    pub fn new(fingerprint: String) -> Self {
        Self { fingerprint }
    }
}
