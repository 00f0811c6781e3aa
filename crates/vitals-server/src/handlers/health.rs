use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use vitals_core::HealthResponse;

use crate::app_state::AppState;

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(&state.profile, state.clock.now()))
}

/// Everything other than `GET /health`: 404 with an empty body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Only the bare path matches; `/health?...` is not found, even with an empty query.
pub async fn require_bare_path(req: Request, next: Next) -> Response {
    if req.uri().query().is_some() {
        return not_found().await.into_response();
    }
    next.run(req).await
}
