//! Router assembly and shared services.

use std::sync::Arc;

use axum::{Extension, Router, middleware::from_fn_with_state, routing::get, routing::post};

use crate::config::ApiConfig;
use crate::directory::UserDirectory;
use crate::middleware::{AuthState, auth_middleware};
use crate::tokens::TokenService;

pub mod errors;
pub mod routes;

/// Shared service handles, one per process.
pub struct AppServices {
    pub directory: Arc<dyn UserDirectory>,
    pub tokens: Arc<TokenService>,
}

/// Build the service router.
pub fn build_app(config: &ApiConfig, directory: Arc<dyn UserDirectory>) -> Router {
    let tokens = Arc::new(TokenService::new(
        &config.jwt_secret,
        config.access_ttl,
        config.refresh_ttl,
    ));
    let services = Arc::new(AppServices {
        directory,
        tokens: tokens.clone(),
    });

    let protected = Router::new()
        .route("/users/profile", get(routes::users::profile))
        .layer(from_fn_with_state(AuthState { tokens }, auth_middleware));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/refresh", post(routes::auth::refresh))
        .route("/auth/logout", post(routes::auth::logout))
        .merge(protected)
        .layer(Extension(services))
}
