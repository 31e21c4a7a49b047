use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use ghosted_core::message::{ChatMessage, ChatRole, ContentPart, MessageContent};
use ghosted_core::parts::build_multimodal_user_parts;
use ghosted_core::profile::StyleProfile;
use ghosted_core::prompts::{build_persona_prompt, ANALYSIS_INSTRUCTIONS};

use crate::error::ApiError;
use crate::state::AppState;

/// Sampling parameters for the one-off style analysis call.
const ANALYSIS_TEMPERATURE: f32 = 0.6;
const ANALYSIS_MAX_TOKENS: u32 = 500;

/// Sampling parameters for in-conversation replies. The tight token cap
/// keeps replies at texting length.
const REPLY_TEMPERATURE: f32 = 0.3;
const REPLY_MAX_TOKENS: u32 = 70;

#[derive(Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Serialize)]
pub struct StartResponse {
    pub session_id: String,
    pub opening: String,
    pub profile: StyleProfile,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<ChatMessage>,
    pub profile: StyleProfile,
}

#[derive(Serialize)]
pub struct SendResponse {
    pub reply: String,
}

/// Analyze the provided samples, build the persona, and open a session
/// seeded with the persona's opening line.
pub async fn start_session(
    State(state): State<AppState>,
    Json(payload): Json<MessagePayload>,
) -> Result<Json<StartResponse>, ApiError> {
    let extra_text = if payload.text.is_empty() {
        String::new()
    } else {
        format!("Extra pasted text:\n{}", payload.text)
    };

    let mut parts = vec![ContentPart::Text {
        text: ANALYSIS_INSTRUCTIONS.to_string(),
    }];
    parts.extend(build_multimodal_user_parts(&extra_text, &payload.images)?);

    let analysis_message = ChatMessage::user_parts(parts);

    let raw = state
        .completions
        .complete(
            None,
            std::slice::from_ref(&analysis_message),
            ANALYSIS_TEMPERATURE,
            ANALYSIS_MAX_TOKENS,
        )
        .await?;

    let profile = StyleProfile::from_model_output(&raw);
    let system = build_persona_prompt(&profile)?;
    let opening = profile.opening_line().to_string();

    let session_id = state
        .sessions
        .create(system, profile.clone(), opening.clone())
        .await;

    info!(%session_id, "session started");

    Ok(Json(StartResponse {
        session_id,
        opening,
        profile,
    }))
}

/// Full stored history plus the profile. Idempotent.
pub async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let handle = state.sessions.get(&id).await?;
    let session = handle.lock().await;

    Ok(Json(HistoryResponse {
        messages: session.messages.clone(),
        profile: session.profile.clone(),
    }))
}

/// Append a user turn, ask the provider for the persona's reply, append it.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MessagePayload>,
) -> Result<Json<SendResponse>, ApiError> {
    let handle = state.sessions.get(&id).await?;

    let parts = build_multimodal_user_parts(&payload.text, &payload.images)?;

    // Hold the session lock across the provider call so concurrent sends on
    // the same session cannot interleave their history writes.
    let mut session = handle.lock().await;
    session.push(ChatRole::User, MessageContent::Parts(parts));

    // A failed provider call returns here with the user turn already in
    // history and no reply; history fetches will show the message as sent.
    let reply = state
        .completions
        .complete(
            Some(&session.system),
            session.context_window(),
            REPLY_TEMPERATURE,
            REPLY_MAX_TOKENS,
        )
        .await?;

    session.push(ChatRole::Assistant, MessageContent::Text(reply.clone()));

    Ok(Json(SendResponse { reply }))
}
