use std::env;
use std::sync::Arc;

use jiff::SignedDuration;
use tracing_subscriber::EnvFilter;

use ghosted_openai::{CompletionClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
use ghosted_server::state::AppState;
use ghosted_sessions::SessionStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty());
    let base_url =
        env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let model = env::var("GHOSTED_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let bind = env::var("GHOSTED_BIND").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let capacity: usize = env::var("GHOSTED_SESSION_CAPACITY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1024);
    let ttl_secs: i64 = env::var("GHOSTED_SESSION_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1800);

    let client = CompletionClient::new(api_key, base_url, model);
    let has_key = client.has_key();

    let state = AppState {
        completions: Arc::new(client),
        sessions: Arc::new(SessionStore::new(
            capacity,
            SignedDuration::from_secs(ttl_secs),
        )),
        has_key,
    };

    let app = ghosted_server::router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(addr = %bind, has_key, "ghosted server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
