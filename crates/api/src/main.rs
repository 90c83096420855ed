use std::sync::Arc;

use salonbw_api::config::ApiConfig;
use salonbw_api::directory::{InMemoryUserDirectory, UserRecord, hash_password};
use salonbw_auth::Role;
use salonbw_core::UserId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    salonbw_observability::init();

    let config = ApiConfig::from_env();

    let directory = Arc::new(InMemoryUserDirectory::new());
    seed_admin(&directory)?;

    let app = salonbw_api::app::build_app(&config, directory);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Seed the bootstrap admin account from the environment.
fn seed_admin(directory: &InMemoryUserDirectory) -> anyhow::Result<()> {
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@salon.local".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        tracing::warn!("ADMIN_PASSWORD not set; using insecure dev default");
        "admin".to_string()
    });

    directory.insert(UserRecord {
        id: UserId::new(),
        email,
        name: "Administrator".to_string(),
        role: Role::Admin,
        password_hash: hash_password(&password)?,
    });
    Ok(())
}
