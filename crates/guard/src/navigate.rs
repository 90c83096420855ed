//! Driving redirects through the host router.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use thiserror::Error;

use salonbw_session::AuthSession;

use crate::state::{GuardState, RouteRequirement, evaluate};

/// The host router rejected a navigation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("navigation rejected: {0}")]
pub struct NavError(pub String);

/// Navigation boundary of the hosting framework.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Client-side route change. May be rejected by the host router.
    async fn push(&self, path: &str) -> Result<(), NavError>;

    /// Hard browser-level navigation. Cannot fail.
    fn assign(&self, path: &str);
}

/// Ties redirect delivery to the lifetime of the view holding the guard.
///
/// Once the view unmounts, any still-pending redirect is discarded silently:
/// late navigation on behalf of a dead view is worse than none.
pub struct GuardBinding {
    navigator: Arc<dyn Navigator>,
    mounted: AtomicBool,
}

impl GuardBinding {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            mounted: AtomicBool::new(true),
        }
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Deliver a redirect, falling back to hard navigation if the router
    /// rejects it. A redirect is never silently dropped while mounted.
    pub async fn redirect(&self, path: &str) {
        if !self.is_mounted() {
            return;
        }
        if let Err(err) = self.navigator.push(path).await {
            if !self.is_mounted() {
                return;
            }
            tracing::warn!(error = %err, path, "router rejected redirect, falling back to hard navigation");
            self.navigator.assign(path);
        }
    }
}

/// A guard wired to the shared session and a navigator.
///
/// `check` is what the hosting framework calls on every navigation/render
/// cycle: it evaluates the current snapshot and, for unauthenticated
/// sessions, drives the login redirect. The returned state tells the caller
/// what to render; the guard itself never mutates the session.
pub struct RouteGuard {
    session: Arc<AuthSession>,
    binding: GuardBinding,
}

impl RouteGuard {
    pub fn new(session: Arc<AuthSession>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            session,
            binding: GuardBinding::new(navigator),
        }
    }

    pub fn binding(&self) -> &GuardBinding {
        &self.binding
    }

    pub async fn check(&self, requirement: &RouteRequirement, intent: &str) -> GuardState {
        let state = evaluate(requirement, &self.session.snapshot(), intent);
        if let GuardState::Unauthenticated { redirect } = &state {
            self.binding.redirect(redirect).await;
        }
        state
    }
}
