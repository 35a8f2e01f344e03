//! Analysis routes: suggest, cluster, summarize, mood, search.
//!
//! Each handler validates presence of its inputs, then hands the snapshot to
//! the engine. Engine calls are synchronous and never fail.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ApiError, json_body};
use crate::analysis::{Board, Card, Cluster, Mood, SearchHit, Summary};
use crate::state::AppState;

// =============================================================================
// BODIES
// =============================================================================

#[derive(Deserialize)]
pub struct TextBody {
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct CardsBody {
    pub cards: Option<Vec<Card>>,
}

#[derive(Deserialize)]
pub struct BoardBody {
    pub board: Option<Board>,
}

#[derive(Deserialize)]
pub struct SearchBody {
    pub query: Option<String>,
    pub cards: Option<Vec<Card>>,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
pub struct ClusterResponse {
    pub clusters: Vec<Cluster>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: Summary,
}

#[derive(Serialize)]
pub struct MoodResponse {
    pub mood: Mood,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

const TEXT_REQUIRED: &str = "text required";
const CARDS_REQUIRED: &str = "cards array required";
const BOARD_REQUIRED: &str = "board required";
const QUERY_AND_CARDS_REQUIRED: &str = "query and cards required";

/// Present and non-empty. Whitespace-only text is passed through so the
/// engine can answer with its own guidance.
fn required_text(payload: Result<Json<TextBody>, JsonRejection>) -> Result<String, ApiError> {
    json_body(payload, TEXT_REQUIRED)?
        .text
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::bad_request(TEXT_REQUIRED))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/suggest`: up to three improvement suggestions for one card.
pub async fn suggest(
    State(state): State<AppState>,
    payload: Result<Json<TextBody>, JsonRejection>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let text = required_text(payload)?;
    let suggestions = state.engine.suggest(&text);
    info!(text_len = text.len(), count = suggestions.len(), "analysis: suggest");
    Ok(Json(SuggestResponse { suggestions }))
}

/// `POST /api/cluster`: group cards by dominant topic.
pub async fn cluster(
    State(state): State<AppState>,
    payload: Result<Json<CardsBody>, JsonRejection>,
) -> Result<Json<ClusterResponse>, ApiError> {
    let cards = json_body(payload, CARDS_REQUIRED)?.cards.ok_or(ApiError::bad_request(CARDS_REQUIRED))?;
    let clusters = state.engine.cluster(&cards);
    info!(cards = cards.len(), clusters = clusters.len(), "analysis: cluster");
    Ok(Json(ClusterResponse { clusters }))
}

/// `POST /api/summarize`: themes, top ideas and next steps for a board.
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<BoardBody>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let board = json_body(payload, BOARD_REQUIRED)?.board.ok_or(ApiError::bad_request(BOARD_REQUIRED))?;
    let summary = state.engine.summarize(&board);
    info!(cards = board.cards().count(), themes = summary.themes.len(), "analysis: summarize");
    Ok(Json(SummaryResponse { summary }))
}

/// `POST /api/mood`: positive / negative / neutral.
pub async fn mood(
    State(state): State<AppState>,
    payload: Result<Json<TextBody>, JsonRejection>,
) -> Result<Json<MoodResponse>, ApiError> {
    let text = required_text(payload)?;
    let mood = state.engine.mood(&text);
    info!(mood = mood.as_str(), "analysis: mood");
    Ok(Json(MoodResponse { mood }))
}

/// `POST /api/search`: case-insensitive substring match over cards.
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let body = json_body(payload, QUERY_AND_CARDS_REQUIRED)?;
    let (Some(query), Some(cards)) = (body.query, body.cards) else {
        return Err(ApiError::bad_request(QUERY_AND_CARDS_REQUIRED));
    };
    let results = state.engine.search(&query, &cards);
    info!(cards = cards.len(), hits = results.len(), "analysis: search");
    Ok(Json(SearchResponse { results }))
}

#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;
