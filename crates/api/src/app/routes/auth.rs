//! Credential exchange endpoints.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use salonbw_auth::Role;

use crate::app::{AppServices, errors};
use crate::directory::verify_password;
use crate::tokens::TokenKind;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub role: Role,
}

/// POST /auth/login
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(req): Json<LoginRequest>,
) -> axum::response::Response {
    let Some(user) = services.directory.find_by_email(&req.email) else {
        return errors::invalid_credentials();
    };
    if !verify_password(&req.password, &user.password_hash) {
        tracing::debug!(email = %user.email, "password mismatch");
        return errors::invalid_credentials();
    }

    match services.tokens.issue_pair(user.id, user.role, Utc::now()) {
        Ok((access_token, refresh_token)) => {
            tracing::info!(user_id = %user.id, role = %user.role, "login");
            Json(TokenResponse {
                access_token,
                refresh_token,
                role: user.role,
            })
            .into_response()
        }
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "token_issue_failed",
            e.to_string(),
        ),
    }
}

/// POST /auth/refresh
pub async fn refresh(
    Extension(services): Extension<Arc<AppServices>>,
    Json(req): Json<RefreshRequest>,
) -> axum::response::Response {
    let now = Utc::now();
    let Ok(claims) = services.tokens.verify(&req.refresh_token, TokenKind::Refresh, now) else {
        return errors::json_error(StatusCode::UNAUTHORIZED, "invalid_token", "refresh rejected");
    };

    // The account may be gone or changed role since the token was minted;
    // the directory stays authoritative.
    let Some(user) = services.directory.find_by_id(claims.sub) else {
        return errors::json_error(StatusCode::UNAUTHORIZED, "invalid_token", "refresh rejected");
    };

    match services.tokens.issue_pair(user.id, user.role, now) {
        Ok((access_token, refresh_token)) => Json(TokenResponse {
            access_token,
            refresh_token,
            role: user.role,
        })
        .into_response(),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "token_issue_failed",
            e.to_string(),
        ),
    }
}

/// POST /auth/logout
///
/// Tokens are stateless, so ending a session is the client discarding its
/// credentials; the endpoint exists for contract symmetry.
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
