use crate::state::AppState;
use airmouse_core::{ClickRequest, InputError, MoveRequest};
use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Health
        .route("/health", get(health_check))
        // Mouse actions
        .route("/mouse/move", post(move_mouse))
        .route("/mouse/click", post(click_mouse))
}

// ---------------------------------------------------------------------------
// Error boundary
// ---------------------------------------------------------------------------

/// Single failure shape for the whole API: anything that goes wrong in a
/// handler — a JSON rejection or an injection failure — is stringified
/// into `{error: <message>}` with HTTP 400.
pub struct ApiError(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": self.0 })),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection.body_text())
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        Self(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let screen = state.mouse.screen();
    Json(serde_json::json!({
        "status": "ok",
        "screen": [screen.width, screen.height],
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Mouse actions
// ---------------------------------------------------------------------------

async fn move_mouse(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(req), _): WithRejection<Json<MoveRequest>, ApiError>,
) -> Result<Response, ApiError> {
    let (x, y) = state.mouse.move_to(req.x, req.y).await?;
    Ok(Json(serde_json::json!({ "success": true, "pos": [x, y] })).into_response())
}

async fn click_mouse(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(req), _): WithRejection<Json<ClickRequest>, ApiError>,
) -> Result<Response, ApiError> {
    state.mouse.click(&req.button).await?;
    Ok(Json(serde_json::json!({ "success": true, "button": req.button })).into_response())
}
