//! Which extracted keys are accepted.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Allowlist of API keys.
///
/// An empty allowlist accepts any well-formed key (development setup).
#[derive(Clone, Default)]
pub struct ApiKeyPolicy {
    allowed: Vec<String>,
}

impl ApiKeyPolicy {
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }

    pub fn is_open(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Compare against every allowed key in constant time (no early return on match).
    pub fn accepts(&self, key: &str) -> bool {
        if self.is_open() {
            return true;
        }

        self.allowed
            .iter()
            .fold(0u8, |hit, allowed| {
                hit | allowed.as_bytes().ct_eq(key.as_bytes()).unwrap_u8()
            })
            == 1
    }
}

// Keys must not end up in logs via `{:?}`.
impl std::fmt::Debug for ApiKeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyPolicy")
            .field("allowed", &self.allowed.len())
            .finish()
    }
}

/// Short, log-safe identifier for a key: first 16 hex chars of SHA-256.
pub fn fingerprint(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    let mut hex = format!("{digest:x}");
    hex.truncate(16);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_policy_accepts_anything() {
        let policy = ApiKeyPolicy::default();
        assert!(policy.is_open());
        assert!(policy.accepts("whatever"));
    }

    #[test]
    fn allowlist_accepts_only_listed_keys() {
        let policy = ApiKeyPolicy::new(vec!["alpha".into(), "beta".into()]);
        assert!(!policy.is_open());
        assert!(policy.accepts("alpha"));
        assert!(policy.accepts("beta"));
        assert!(!policy.accepts("gamma"));
        assert!(!policy.accepts("alph"));
        assert!(!policy.accepts(" alpha"));
    }

    #[test]
    fn debug_does_not_leak_keys() {
        let policy = ApiKeyPolicy::new(vec!["super-secret".into()]);
        assert!(!format!("{policy:?}").contains("super-secret"));
    }

    #[test]
    fn fingerprint_is_short_and_stable() {
        let a = fingerprint("test-api-key-123");
        assert_eq!(a.len(), 16);
        assert_eq!(a, fingerprint("test-api-key-123"));
        assert_ne!(a, fingerprint("test-api-key-124"));
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(fingerprint("abc"), "ba7816bf8f01cfea");
    }
}
