//! The shared authentication session.

use std::sync::{
    Arc, RwLock,
    atomic::{AtomicBool, Ordering},
};

use thiserror::Error;

use salonbw_auth::Role;

use crate::gateway::{AuthGateway, Credentials, GatewayError, UserProfile};
use crate::store::CredentialStore;

/// Immutable view of the session for guard evaluation.
///
/// Snapshots are cheap copies; a guard never holds the session lock across a
/// render. `initialized` is monotonic: once `true` it never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub initialized: bool,
    pub authenticated: bool,
    pub role: Option<Role>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// No stored session to operate on.
    #[error("no active session")]
    NotAuthenticated,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Debug, Default)]
struct SessionState {
    initialized: bool,
    authenticated: bool,
    role: Option<Role>,
    user: Option<UserProfile>,
}

/// The process-wide authentication session.
///
/// Single writer, many readers: `initialize`, `login`, `refresh`, and
/// `logout` are the only state transitions; everyone else consumes
/// [`SessionSnapshot`]s. Credential storage is updated under the same write
/// lock as the in-memory flip, so memory and storage never disagree.
pub struct AuthSession {
    state: RwLock<SessionState>,
    restore_started: AtomicBool,
    store: Arc<dyn CredentialStore>,
    gateway: Arc<dyn AuthGateway>,
}

impl AuthSession {
    pub fn new(store: Arc<dyn CredentialStore>, gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            restore_started: AtomicBool::new(false),
            store,
            gateway,
        }
    }

    /// Passive startup restore. Runs at most once; later calls are no-ops.
    ///
    /// Reads stored tokens and tries to resolve the profile behind them.
    /// Failure here is not an error: stale or revoked tokens simply mean
    /// "not signed in", so the tokens are discarded and the session settles
    /// unauthenticated. Either way `initialized` ends up `true`.
    pub async fn initialize(&self) {
        if self.restore_started.swap(true, Ordering::SeqCst) {
            return;
        }

        let restored = match self.store.read() {
            None => None,
            Some(tokens) => match self.gateway.fetch_profile(&tokens.access_token).await {
                Ok(profile) => Some(profile),
                Err(err) => {
                    tracing::debug!(error = %err, "session restore failed, discarding stored credentials");
                    self.store.clear();
                    None
                }
            },
        };

        let mut state = self.state.write().expect("session state poisoned");
        state.initialized = true;
        if let Some(profile) = restored {
            tracing::info!(role = %profile.role, "session restored");
            state.authenticated = true;
            state.role = Some(profile.role);
            state.user = Some(profile);
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token pair is persisted and the in-memory state flips
    /// in the same transition; the resolved role is returned so the caller
    /// can route to the landing page. On failure nothing changes and the
    /// error surfaces to the caller for display.
    pub async fn login(&self, credentials: &Credentials) -> Result<Role, SessionError> {
        let response = self.gateway.login(credentials).await?;

        // Display data only; the role from the exchange stays authoritative.
        let profile = self
            .gateway
            .fetch_profile(&response.tokens.access_token)
            .await
            .ok();

        let mut state = self.state.write().expect("session state poisoned");
        self.store.write(&response.tokens);
        // A successful login settles the session even if the passive restore
        // has not run yet; initialized stays monotonic.
        state.initialized = true;
        state.authenticated = true;
        state.role = Some(response.role);
        state.user = profile;
        tracing::info!(role = %response.role, "login succeeded");
        Ok(response.role)
    }

    /// Rotate the stored token pair.
    ///
    /// Any failure ends the session: a refresh token the backend rejects is
    /// unrecoverable, so the caller sees the error and the session is
    /// already logged out.
    pub async fn refresh(&self) -> Result<(), SessionError> {
        let Some(tokens) = self.store.read() else {
            return Err(SessionError::NotAuthenticated);
        };

        let pair = match self.gateway.refresh(&tokens.refresh_token).await {
            Ok(pair) => pair,
            Err(err) => {
                tracing::warn!(error = %err, "token refresh rejected, logging out");
                self.logout();
                return Err(err.into());
            }
        };

        let profile = match self.gateway.fetch_profile(&pair.access_token).await {
            Ok(profile) => profile,
            Err(err) => {
                self.logout();
                return Err(err.into());
            }
        };

        let mut state = self.state.write().expect("session state poisoned");
        self.store.write(&pair);
        state.initialized = true;
        state.authenticated = true;
        state.role = Some(profile.role);
        state.user = Some(profile);
        Ok(())
    }

    /// End the session. Synchronous and idempotent.
    ///
    /// Memory and storage are cleared in one transition; a snapshot taken
    /// after this returns already reads unauthenticated. `initialized` is
    /// untouched, there is no way back to the pending state.
    pub fn logout(&self) {
        let mut state = self.state.write().expect("session state poisoned");
        self.store.clear();
        state.authenticated = false;
        state.role = None;
        state.user = None;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().expect("session state poisoned");
        SessionSnapshot {
            initialized: state.initialized,
            authenticated: state.authenticated,
            role: state.role,
        }
    }

    /// Profile of the signed-in user, if one was resolved.
    pub fn profile(&self) -> Option<UserProfile> {
        self.state
            .read()
            .expect("session state poisoned")
            .user
            .clone()
    }
}
