//! Persisted credential storage boundary.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Access/refresh token pair as issued by the credential exchange and kept
/// in durable client storage so a session survives reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Durable credential storage (browser storage, keychain, a file).
///
/// Storage failures are the implementor's problem to absorb: a store that
/// cannot persist (private browsing, full disk) must degrade to reporting
/// nothing on `read`, never propagate. The session treats the store's answer
/// as authoritative and keeps it in lockstep with its in-memory state.
pub trait CredentialStore: Send + Sync {
    fn read(&self) -> Option<TokenPair>;
    fn write(&self, tokens: &TokenPair);
    fn clear(&self);
}

/// Process-local credential store.
///
/// Backs tests and embedded setups where no durable storage exists.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    inner: Mutex<Option<TokenPair>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed stored tokens, as a persisted session from a previous run.
    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            inner: Mutex::new(Some(tokens)),
        }
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn read(&self) -> Option<TokenPair> {
        self.inner.lock().expect("credential store poisoned").clone()
    }

    fn write(&self, tokens: &TokenPair) {
        *self.inner.lock().expect("credential store poisoned") = Some(tokens.clone());
    }

    fn clear(&self) {
        *self.inner.lock().expect("credential store poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> TokenPair {
        TokenPair {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
        }
    }

    #[test]
    fn starts_empty() {
        assert_eq!(InMemoryCredentialStore::new().read(), None);
    }

    #[test]
    fn write_then_read_returns_the_pair() {
        let store = InMemoryCredentialStore::new();
        store.write(&pair());
        assert_eq!(store.read(), Some(pair()));
    }

    #[test]
    fn clear_is_idempotent() {
        let store = InMemoryCredentialStore::with_tokens(pair());
        store.clear();
        store.clear();
        assert_eq!(store.read(), None);
    }
}
