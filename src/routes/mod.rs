//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API under `/api` and serves the built frontend
//! from the static directory for everything else. Validation of request
//! bodies happens here; analysis itself never fails, so only malformed
//! requests and storage errors produce non-200 responses.

pub mod analysis;
pub mod auth;
pub mod boards;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::rejection::JsonRejection;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::config::Config;
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    #[must_use]
    pub fn bad_request(message: &'static str) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: "internal" }
    }
}

/// Unwrap a JSON body. Malformed or mistyped payloads are answered with the
/// route's own validation message; transport failures (size limit, content
/// type) keep their status.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>, message: &'static str) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection @ (JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_))) => {
            debug!(error = %rejection.body_text(), "rejected request body");
            Err(ApiError::bad_request(message))
        }
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "rejected request body");
            Err(ApiError { status: rejection.status(), message: "invalid request body" })
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/board", get(boards::get_board).post(boards::save_board))
        .route("/api/suggest", post(analysis::suggest))
        .route("/api/cluster", post(analysis::cluster))
        .route("/api/summarize", post(analysis::summarize))
        .route("/api/mood", post(analysis::mood))
        .route("/api/search", post(analysis::search))
        .route("/healthz", get(healthz))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

/// Full application: API routes plus the static frontend at `/`.
pub fn app(state: AppState, config: &Config) -> Router {
    api_routes(state)
        .fallback_service(ServeDir::new(&config.static_dir).append_index_html_on_directories(true))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors_layer(&config.cors_origins))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
