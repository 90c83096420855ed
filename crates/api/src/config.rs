//! Service configuration from the environment.

use chrono::Duration;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub jwt_secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl ApiConfig {
    /// Read configuration from environment variables, with dev defaults.
    ///
    /// `JWT_SECRET` has an insecure fallback so local development works out
    /// of the box; production deployments must set it.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            jwt_secret,
            access_ttl: Duration::minutes(env_i64("ACCESS_TOKEN_TTL_MINUTES", 15)),
            refresh_ttl: Duration::days(env_i64("REFRESH_TOKEN_TTL_DAYS", 7)),
        }
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, %raw, "not a number, using default");
            default
        }),
        Err(_) => default,
    }
}
