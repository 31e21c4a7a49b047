//! ghosted-server
//!
//! HTTP surface for the texting-persona simulator.

pub mod error;
pub mod routes;
pub mod state;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use state::AppState;

/// Browser origins allowed to call the API (local dev frontends).
pub const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/start", post(routes::sessions::start_session))
        .route(
            "/api/session/{id}/history",
            get(routes::sessions::get_history),
        )
        .route(
            "/api/session/{id}/send",
            post(routes::sessions::send_message),
        )
        .layer(cors)
        .with_state(state)
}
