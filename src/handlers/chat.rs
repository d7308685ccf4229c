use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::{ChatRequest, MessageResponse};
use crate::error::{AppError, AppResult};
use crate::models::ChatMessage;
use crate::store::ChatLog;
use crate::AppState;

const SYSTEM_PROMPT: &str = "You are Sprout, a compassionate and empathetic AI therapist. Your responses should be warm, supportive, and helpful. Use therapeutic techniques like validation, reflective listening, and gentle guidance. Avoid giving medical advice or diagnosing conditions. Focus on emotional support and coping strategies. Keep responses concise (2-3 sentences) but meaningful. Your goal is to help the user feel heard, understood, and supported in a safe space.";

/// Number of prior messages sent along as conversation context.
const CONTEXT_MESSAGES: usize = 4;

/// Appends the user's message to the session log, delegates to the
/// chat-completion API, and appends the reply. A failed upstream call
/// surfaces as an error with no retry; the user message stays logged.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatMessage>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if state.config.openai_api_key.is_empty() {
        return Err(AppError::Validation(
            "OPENAI_API_KEY is not configured".into(),
        ));
    }

    let log = ChatLog::new(state.store.clone());
    let history = log.all().await?;
    let user_message = ChatMessage::user(body.content);
    log.append(&user_message).await?;

    let mut messages = vec![serde_json::json!({
        "role": "system",
        "content": SYSTEM_PROMPT,
    })];
    for msg in history.iter().rev().take(CONTEXT_MESSAGES).rev() {
        messages.push(serde_json::json!({ "role": msg.role, "content": msg.content }));
    }
    messages.push(serde_json::json!({ "role": user_message.role, "content": user_message.content }));

    let url = format!("{}/chat/completions", state.config.openai_base_url);
    let response = state
        .http
        .post(&url)
        .bearer_auth(&state.config.openai_api_key)
        .json(&serde_json::json!({
            "model": state.config.openai_model,
            "messages": messages,
            "max_tokens": 150,
        }))
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("chat completion request failed: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        return Err(AppError::Upstream(format!(
            "chat completion failed with status {status}"
        )));
    }

    let data: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(format!("chat completion returned invalid JSON: {e}")))?;
    let reply = data["choices"][0]["message"]["content"]
        .as_str()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Upstream("chat completion returned no content".into()))?;

    let assistant_message = ChatMessage::assistant(reply);
    log.append(&assistant_message).await?;

    Ok(Json(assistant_message))
}

pub async fn list_messages(State(state): State<AppState>) -> AppResult<Json<Vec<ChatMessage>>> {
    let messages = ChatLog::new(state.store.clone()).all().await?;
    Ok(Json(messages))
}

pub async fn clear_messages(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    ChatLog::new(state.store.clone()).clear().await?;
    Ok(Json(MessageResponse {
        message: "Chat session cleared".into(),
    }))
}
