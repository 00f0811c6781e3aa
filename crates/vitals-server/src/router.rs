use axum::{
    handler::Handler,
    http::{header, HeaderValue},
    middleware,
    routing::{on, MethodFilter},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use vitals_core::HEALTH_PATH;

use crate::app_state::AppState;
use crate::handlers;

/// Create the responder's router.
///
/// Only `GET /health` without a query string is answered. HEAD and every
/// other method on that path, and all other paths, fall through to an empty
/// 404. No request tracing layer is installed.
pub fn create_router(state: AppState) -> Router {
    // CORS: the health answer may be read from any origin
    let allow_any_origin = SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    let health = handlers::health
        .layer(allow_any_origin)
        .layer(middleware::from_fn(handlers::require_bare_path));

    Router::new()
        // `on(GET)` rather than `get`, which would also answer HEAD
        .route(
            HEALTH_PATH,
            on(MethodFilter::GET, health).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(state)
}
