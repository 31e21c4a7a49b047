use std::sync::Arc;

use ghosted_openai::Completions;
use ghosted_sessions::SessionStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub completions: Arc<dyn Completions>,
    pub sessions: Arc<SessionStore>,
    pub has_key: bool,
}
