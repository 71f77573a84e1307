//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::error;

use crate::{
    error::AppError,
    state::{AppState, StopwatchView},
};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

type ActionResult = Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)>;

/// Turn the outcome of an action into an HTTP response
///
/// Invalid transitions answer 409 with the unchanged view so the client can
/// redraw its controls.
fn respond(state: &AppState, message: &str, result: Result<StopwatchView, AppError>) -> ActionResult {
    match result {
        Ok(view) => Ok(Json(ApiResponse::ok(message.to_string(), view))),
        Err(AppError::Transition(e)) => match state.view() {
            Ok(view) => Err((StatusCode::CONFLICT, Json(ApiResponse::error(e.to_string(), Some(view))))),
            Err(e) => Err(internal_error(e)),
        },
        Err(e) => Err(internal_error(e)),
    }
}

fn internal_error(e: AppError) -> (StatusCode, Json<ApiResponse>) {
    error!("Failed to handle stopwatch action: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(e.to_string(), None)),
    )
}

/// Handle POST /start - Start a fresh stopwatch
pub async fn start_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(&state, "Stopwatch started", state.start())
}

/// Handle POST /lap - Close the current lap and open a new one
pub async fn lap_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(&state, "Lap recorded", state.lap())
}

/// Handle POST /stop - Pause the stopwatch
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(&state, "Stopwatch stopped", state.stop())
}

/// Handle POST /resume - Continue a stopped stopwatch
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(&state, "Stopwatch resumed", state.resume())
}

/// Handle POST /reset - Clear all laps
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    respond(&state, "Stopwatch reset", state.reset())
}

/// Handle GET /status - Return the current read model
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let view = match state.view() {
        Ok(v) => v,
        Err(e) => {
            error!("Failed to get stopwatch view: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let ticker_active = match state.ticker_active() {
        Ok(active) => active,
        Err(e) => {
            error!("Failed to get ticker state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        view,
        ticker_active,
        uptime: state.get_uptime(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET / - Render the screen as plain text
pub async fn screen_handler(State(state): State<Arc<AppState>>) -> Result<String, StatusCode> {
    state.view().map(|view| view.render_text()).map_err(|e| {
        error!("Failed to render stopwatch: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_failure_omits_view() {
        let (code, Json(body)) = internal_error(AppError::LockPoisoned("stopwatch"));
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.status, "error");
        assert_eq!(body.message, "failed to lock stopwatch");
        assert!(body.view.is_none());

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("view").is_none());
    }

    #[test]
    fn rejected_action_keeps_current_view() {
        let state = AppState::with_clock(
            std::time::Duration::from_millis(100),
            std::sync::Arc::new(crate::services::ManualClock::new(0)),
        );
        let result = state.stop();
        let (code, Json(body)) = respond(&state, "Stopwatch stopped", result).unwrap_err();
        assert_eq!(code, StatusCode::CONFLICT);
        assert_eq!(body.view.map(|v| v.phase), Some(crate::state::Phase::Idle));
    }
}
