//! Board routes: load and save a user's board.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use super::{ApiError, json_body};
use crate::analysis::Board;
use crate::services::board::{self, BoardError};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardQuery {
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBoardBody {
    pub user_id: Option<String>,
    pub board: Option<Board>,
}

const SAVE_REQUIRED: &str = "userId and board required";

fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::bad_request("invalid userId"))
}

pub(crate) fn board_error_to_api(err: &BoardError) -> ApiError {
    error!(error = %err, "board storage failed");
    ApiError::internal()
}

/// `GET /api/board?userId=`: stored board, or the starter board.
pub async fn get_board(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<Board>, ApiError> {
    let raw = query.user_id.ok_or(ApiError::bad_request("userId required"))?;
    let user_id = parse_user_id(&raw)?;

    let board = board::load_board_or_starter(&state.pool, user_id)
        .await
        .map_err(|e| board_error_to_api(&e))?;
    Ok(Json(board))
}

/// `POST /api/board`: replace the user's stored board.
pub async fn save_board(
    State(state): State<AppState>,
    payload: Result<Json<SaveBoardBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let body = json_body(payload, SAVE_REQUIRED)?;
    let (Some(raw), Some(board)) = (body.user_id, body.board) else {
        return Err(ApiError::bad_request(SAVE_REQUIRED));
    };
    let user_id = parse_user_id(&raw)?;

    board::save_board(&state.pool, user_id, &board)
        .await
        .map_err(|e| board_error_to_api(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "boards_test.rs"]
mod tests;
