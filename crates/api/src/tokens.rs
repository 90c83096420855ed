//! HS256 token issuance and verification.
//!
//! Access and refresh tokens share one signing key but carry a `kind`
//! discriminator, so a refresh token can never pass as an access token or
//! the other way round. Time-window checks delegate to the deterministic
//! claims validator in `salonbw-auth`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use salonbw_auth::{AccessClaims, Role, TokenValidationError, validate_claims};
use salonbw_core::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims as they travel inside the JWT.
#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    sub: UserId,
    role: Role,
    kind: TokenKind,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token rejected: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("wrong token kind")]
    WrongKind,

    #[error("corrupt timestamp claim")]
    CorruptTimestamp,

    #[error(transparent)]
    Window(#[from] TokenValidationError),
}

pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn issue(
        &self,
        user_id: UserId,
        role: Role,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };
        let claims = WireClaims {
            sub: user_id,
            role,
            kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Issue the `(access, refresh)` pair a successful exchange returns.
    pub fn issue_pair(
        &self,
        user_id: UserId,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<(String, String), TokenError> {
        let access = self.issue(user_id, role, TokenKind::Access, now)?;
        let refresh = self.issue(user_id, role, TokenKind::Refresh, now)?;
        Ok((access, refresh))
    }

    /// Verify signature, kind, and time window; return the session claims.
    pub fn verify(
        &self,
        token: &str,
        expected: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<AccessClaims, TokenError> {
        // The time window is checked by the shared claims validator below,
        // not by the decoder.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let wire = decode::<WireClaims>(token, &self.decoding, &validation)?.claims;

        if wire.kind != expected {
            return Err(TokenError::WrongKind);
        }

        let claims = AccessClaims {
            sub: wire.sub,
            role: wire.role,
            issued_at: DateTime::from_timestamp(wire.iat, 0).ok_or(TokenError::CorruptTimestamp)?,
            expires_at: DateTime::from_timestamp(wire.exp, 0).ok_or(TokenError::CorruptTimestamp)?,
        };
        validate_claims(&claims, now)?;
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::minutes(15), Duration::days(7))
    }

    #[test]
    fn issued_access_token_verifies() {
        let service = service();
        let user_id = UserId::new();
        let now = Utc::now();

        let token = service.issue(user_id, Role::Admin, TokenKind::Access, now).unwrap();
        let claims = service.verify(&token, TokenKind::Access, now).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn refresh_token_is_not_an_access_token() {
        let service = service();
        let now = Utc::now();
        let token = service
            .issue(UserId::new(), Role::Client, TokenKind::Refresh, now)
            .unwrap();

        let err = service.verify(&token, TokenKind::Access, now).unwrap_err();
        assert!(matches!(err, TokenError::WrongKind));
    }

    #[test]
    fn expired_access_token_is_rejected() {
        let service = service();
        let issued = Utc::now() - Duration::hours(1);
        let token = service
            .issue(UserId::new(), Role::Client, TokenKind::Access, issued)
            .unwrap();

        let err = service.verify(&token, TokenKind::Access, Utc::now()).unwrap_err();
        assert!(matches!(err, TokenError::Window(TokenValidationError::Expired)));
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let now = Utc::now();
        let token = TokenService::new("other-secret", Duration::minutes(15), Duration::days(7))
            .issue(UserId::new(), Role::Client, TokenKind::Access, now)
            .unwrap();

        let err = service().verify(&token, TokenKind::Access, now).unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = service()
            .verify("not.a.token", TokenKind::Access, Utc::now())
            .unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }
}
