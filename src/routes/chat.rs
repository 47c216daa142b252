use axum::{
    Json,
    body::Bytes,
    extract::State,
};
use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

const INVALID_PROMPT: &str = "invalid prompt";

/// Decodes the body as JSON whatever its content type says.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let payload: ChatRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::debug!(error = %err, "rejected chat body");
        AppError::InvalidInput(INVALID_PROMPT.to_string())
    })?;

    // Trimmed only for the emptiness check; the raw prompt goes upstream.
    if payload.prompt.trim().is_empty() {
        tracing::debug!("rejected empty prompt");
        return Err(AppError::InvalidInput(INVALID_PROMPT.to_string()));
    }

    let reply = state
        .completions
        .complete(&payload.prompt)
        .await
        .inspect_err(|err| tracing::warn!(error = %err, "upstream completion failed"))?;

    Ok(Json(ChatResponse { reply }))
}
