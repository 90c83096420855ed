//! Backend authentication collaborator boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use salonbw_auth::Role;
use salonbw_core::UserId;

use crate::store::TokenPair;

/// Credentials presented to the exchange endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful credential exchange: tokens plus the role the backend resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub tokens: TokenPair,
    pub role: Role,
}

/// Profile record returned for a stored token, used to resolve the role on
/// session restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub role: Role,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend rejected the presented credentials or token.
    #[error("credentials rejected")]
    Rejected,

    /// The exchange could not complete (network, serialization, 5xx).
    #[error("auth backend unreachable: {0}")]
    Transport(String),
}

/// Opaque asynchronous boundary to the authentication backend.
///
/// Implementations own transport details (HTTP client, base URL, retries).
/// The session never inspects tokens; it moves them between this gateway and
/// the [`CredentialStore`](crate::CredentialStore).
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token pair and the session role.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, GatewayError>;

    /// Exchange a refresh token for a fresh pair.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, GatewayError>;

    /// Resolve the profile behind an access token.
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, GatewayError>;
}
