//! HTTP implementation of the auth gateway.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use salonbw_auth::Role;
use salonbw_core::UserId;

use crate::gateway::{AuthGateway, Credentials, GatewayError, LoginResponse, UserProfile};
use crate::store::TokenPair;

/// Gateway speaking to the platform's auth service.
pub struct HttpAuthGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponseDto {
    access_token: String,
    refresh_token: String,
    role: Role,
}

#[derive(Debug, Deserialize)]
struct ProfileDto {
    id: UserId,
    role: Role,
    name: String,
    email: String,
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

/// Map rejection statuses before touching the body.
fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GatewayError::Rejected),
        status => Err(GatewayError::Transport(format!("unexpected status {status}"))),
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, GatewayError> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(credentials)
            .send()
            .await
            .map_err(transport)?;

        let dto: TokenResponseDto = expect_success(response)?.json().await.map_err(transport)?;
        Ok(LoginResponse {
            tokens: TokenPair {
                access_token: dto.access_token,
                refresh_token: dto.refresh_token,
            },
            role: dto.role,
        })
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, GatewayError> {
        let response = self
            .client
            .post(format!("{}/auth/refresh", self.base_url))
            .json(&RefreshRequest { refresh_token })
            .send()
            .await
            .map_err(transport)?;

        let dto: TokenResponseDto = expect_success(response)?.json().await.map_err(transport)?;
        Ok(TokenPair {
            access_token: dto.access_token,
            refresh_token: dto.refresh_token,
        })
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, GatewayError> {
        let response = self
            .client
            .get(format!("{}/users/profile", self.base_url))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport)?;

        let dto: ProfileDto = expect_success(response)?.json().await.map_err(transport)?;
        Ok(UserProfile {
            id: dto.id,
            role: dto.role,
            name: dto.name,
            email: dto.email,
        })
    }
}
