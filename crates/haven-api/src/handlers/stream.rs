use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    Json,
};
use futures::stream::{Stream, StreamExt};
use haven::{CompanionEvent, Mood};
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Header carrying the chat a `POST /messages` landed in
pub const CHAT_ID_HEADER: &str = "x-chat-id";

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub text: String,
    /// One of happy, sad, anxious, stressed, calm, excited, angry, neutral.
    /// Unrecognized values are ignored.
    #[serde(default)]
    pub mood: Option<String>,
}

impl SendMessageRequest {
    fn mood(&self) -> Option<Mood> {
        self.mood.as_deref().and_then(|m| m.parse().ok())
    }
}

/// Send a message to a chat and stream the exchange using Server-Sent Events
#[utoipa::path(
    post,
    path = "/chats/{chat_id}/messages",
    params(
        ("chat_id" = String, Path, description = "Chat ID")
    ),
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Streaming response", content_type = "text/event-stream"),
        (status = 204, description = "Blank message, nothing sent"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Chat not found")
    ),
    tag = "messages"
)]
pub async fn send_message_stream(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> ApiResult<Response> {
    state.require_user().await?;

    if state.companion.chat(&chat_id).await.is_none() {
        return Err(ApiError::ChatNotFound(chat_id));
    }

    let events = state
        .companion
        .send_message(&chat_id, &req.text, req.mood())
        .await?;

    Ok(match events {
        Some(rx) => event_stream(rx).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// Send to the current chat, creating one when none is selected
#[utoipa::path(
    post,
    path = "/messages",
    request_body = SendMessageRequest,
    responses(
        (
            status = 200,
            description = "Streaming response; the chat id is in the x-chat-id header",
            content_type = "text/event-stream"
        ),
        (status = 204, description = "Blank message, nothing sent"),
        (status = 401, description = "Not signed in")
    ),
    tag = "messages"
)]
pub async fn send_to_current_stream(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendMessageRequest>,
) -> ApiResult<Response> {
    state.require_user().await?;

    let Some((chat_id, rx)) = state
        .companion
        .send_to_current(&req.text, req.mood())
        .await?
    else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let mut response = event_stream(rx).into_response();
    if let Ok(value) = HeaderValue::from_str(&chat_id) {
        response.headers_mut().insert(CHAT_ID_HEADER, value);
    }
    Ok(response)
}

fn event_stream(
    rx: mpsc::Receiver<CompanionEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = ReceiverStream::new(rx).map(|event| Ok::<Event, Infallible>(to_sse_event(&event)));
    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn to_sse_event(event: &CompanionEvent) -> Event {
    Event::default()
        .event(event.name())
        .json_data(event)
        .unwrap_or_else(|e| {
            tracing::error!("Failed to encode {} event: {}", event.name(), e);
            Event::default().event("error").data(e.to_string())
        })
}
