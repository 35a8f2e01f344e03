//! Auth routes: username login.
//!
//! There are no passwords or sessions: a username maps to a stable user id
//! that the client sends back with board reads and writes.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use super::{ApiError, json_body};
use crate::services::board;
use crate::state::AppState;

const USERNAME_REQUIRED: &str = "username required";

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub username: String,
}

/// `POST /api/auth/login`: get or create the user for `username`.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginBody>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = json_body(payload, USERNAME_REQUIRED)?
        .username
        .map(|u| u.trim().to_owned())
        .filter(|u| !u.is_empty())
        .ok_or(ApiError::bad_request(USERNAME_REQUIRED))?;

    let user = board::get_or_create_user(&state.pool, &username)
        .await
        .map_err(|e| {
            error!(error = %e, "login failed");
            ApiError::internal()
        })?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse { user_id: user.id, username: user.username }))
}
