use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub has_key: bool,
}

/// Static status plus whether a provider API key is configured. The key is
/// never enforced here; calls without one fail at the provider.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        has_key: state.has_key,
    })
}
