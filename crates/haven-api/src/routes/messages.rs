use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use haven::{Message, MessageCategory, Mood, Sender};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message_id: String,
    pub text: String,
    #[schema(value_type = String, example = "user")]
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "anxious")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "tip")]
    pub category: Option<MessageCategory>,
}

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListMessagesResponse {
    pub messages: Vec<MessageResponse>,
    pub composing: bool,
}

/// List messages in a chat, oldest first
#[utoipa::path(
    get,
    path = "/chats/{chat_id}/messages",
    params(
        ("chat_id" = String, Path, description = "Chat ID"),
        ("limit" = Option<usize>, Query, description = "Only return the most recent N messages")
    ),
    responses(
        (status = 200, description = "List of messages", body = ListMessagesResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Chat not found")
    ),
    tag = "messages"
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<String>,
    Query(query): Query<ListMessagesQuery>,
) -> ApiResult<Json<ListMessagesResponse>> {
    state.require_user().await?;

    let chat = state
        .companion
        .chat(&chat_id)
        .await
        .ok_or_else(|| ApiError::ChatNotFound(chat_id))?;

    let skip = query
        .limit
        .map(|limit| chat.messages.len().saturating_sub(limit))
        .unwrap_or(0);

    let messages = chat
        .messages
        .into_iter()
        .skip(skip)
        .map(message_to_response)
        .collect();

    Ok(Json(ListMessagesResponse {
        messages,
        composing: state.companion.is_composing().await,
    }))
}

pub(crate) fn message_to_response(message: Message) -> MessageResponse {
    MessageResponse {
        message_id: message.id,
        text: message.text,
        sender: message.sender,
        timestamp: message.timestamp,
        mood: message.mood,
        category: message.category,
    }
}
