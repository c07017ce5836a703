use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use haven::Chat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::messages::{message_to_response, MessageResponse};
use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatSummaryResponse {
    pub chat_id: String,
    pub title: String,
    pub message_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub chat_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<MessageResponse>,
}

/// Chats newest first, plus the selection pointer
#[derive(Debug, Serialize, ToSchema)]
pub struct ListChatsResponse {
    pub chats: Vec<ChatSummaryResponse>,
    pub current_chat_id: Option<String>,
    pub composing: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectChatRequest {
    pub chat_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentChatResponse {
    pub current_chat_id: Option<String>,
}

/// List the signed-in user's chats
#[utoipa::path(
    get,
    path = "/chats",
    responses(
        (status = 200, description = "List of chats", body = ListChatsResponse),
        (status = 401, description = "Not signed in")
    ),
    tag = "chats"
)]
pub async fn list_chats(State(state): State<Arc<AppState>>) -> ApiResult<Json<ListChatsResponse>> {
    state.require_user().await?;

    let chats = state
        .companion
        .chats()
        .await
        .iter()
        .map(chat_to_summary)
        .collect();

    Ok(Json(ListChatsResponse {
        chats,
        current_chat_id: state.companion.current_chat_id().await,
        composing: state.companion.is_composing().await,
    }))
}

/// Create an empty chat and select it
#[utoipa::path(
    post,
    path = "/chats",
    responses(
        (status = 201, description = "Chat created", body = ChatResponse),
        (status = 401, description = "Not signed in")
    ),
    tag = "chats"
)]
pub async fn create_chat(
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<ChatResponse>)> {
    state.require_user().await?;

    let chat_id = state.companion.create_chat().await?;
    let chat = state
        .companion
        .chat(&chat_id)
        .await
        .ok_or_else(|| ApiError::ChatNotFound(chat_id))?;

    Ok((StatusCode::CREATED, Json(chat_to_response(chat))))
}

/// Get a chat with all of its messages
#[utoipa::path(
    get,
    path = "/chats/{chat_id}",
    params(
        ("chat_id" = String, Path, description = "Chat ID")
    ),
    responses(
        (status = 200, description = "Chat details", body = ChatResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Chat not found")
    ),
    tag = "chats"
)]
pub async fn get_chat(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<String>,
) -> ApiResult<Json<ChatResponse>> {
    state.require_user().await?;

    let chat = state
        .companion
        .chat(&chat_id)
        .await
        .ok_or_else(|| ApiError::ChatNotFound(chat_id))?;

    Ok(Json(chat_to_response(chat)))
}

/// Delete a chat; deleting an unknown chat is not an error
#[utoipa::path(
    delete,
    path = "/chats/{chat_id}",
    params(
        ("chat_id" = String, Path, description = "Chat ID")
    ),
    responses(
        (status = 204, description = "Chat deleted"),
        (status = 401, description = "Not signed in")
    ),
    tag = "chats"
)]
pub async fn delete_chat(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.require_user().await?;

    if !state.companion.delete_chat(&chat_id).await? {
        tracing::debug!(chat_id = %chat_id, "Delete of unknown chat ignored");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Select the current chat; an unknown id leaves the selection unchanged
#[utoipa::path(
    put,
    path = "/chats/current",
    request_body = SelectChatRequest,
    responses(
        (status = 200, description = "Selection after the request", body = CurrentChatResponse),
        (status = 401, description = "Not signed in")
    ),
    tag = "chats"
)]
pub async fn select_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectChatRequest>,
) -> ApiResult<Json<CurrentChatResponse>> {
    state.require_user().await?;

    state.companion.select_chat(&req.chat_id).await?;

    Ok(Json(CurrentChatResponse {
        current_chat_id: state.companion.current_chat_id().await,
    }))
}

fn chat_to_summary(chat: &Chat) -> ChatSummaryResponse {
    ChatSummaryResponse {
        chat_id: chat.id.clone(),
        title: chat.title.clone(),
        message_count: chat.messages.len(),
        last_message: chat.last_message().map(|m| m.text.clone()),
        created_at: chat.created_at,
        updated_at: chat.updated_at,
    }
}

fn chat_to_response(chat: Chat) -> ChatResponse {
    ChatResponse {
        chat_id: chat.id,
        title: chat.title,
        created_at: chat.created_at,
        updated_at: chat.updated_at,
        messages: chat.messages.into_iter().map(message_to_response).collect(),
    }
}
