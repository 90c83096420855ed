//! Profile endpoints.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use salonbw_auth::Role;
use salonbw_core::UserId;

use crate::app::{AppServices, errors};
use crate::context::CurrentUser;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: UserId,
    pub role: Role,
    pub name: String,
    pub email: String,
}

/// GET /users/profile
pub async fn profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
) -> axum::response::Response {
    // A valid token for a deleted account still gets a 401: the session
    // restore on the other side treats it as "not signed in".
    let Some(user) = services.directory.find_by_id(current.user_id()) else {
        return errors::json_error(StatusCode::UNAUTHORIZED, "unknown_subject", "account not found");
    };

    Json(ProfileResponse {
        id: user.id,
        role: user.role,
        name: user.name,
        email: user.email,
    })
    .into_response()
}
