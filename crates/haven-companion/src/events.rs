use haven_types::{ChatId, Message};
use serde::Serialize;

/// Progress of one `send_message` call, in emission order
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompanionEvent {
    /// The user's message was stored
    UserMessage { chat_id: ChatId, message: Message },

    /// A reply is being composed
    Composing { chat_id: ChatId },

    /// The reply was stored
    AssistantMessage { chat_id: ChatId, message: Message },

    /// The reply could not be stored
    Error { chat_id: ChatId, message: String },

    /// Nothing more will be sent for this message
    Done { chat_id: ChatId },
}

impl CompanionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CompanionEvent::UserMessage { .. } => "user_message",
            CompanionEvent::Composing { .. } => "composing",
            CompanionEvent::AssistantMessage { .. } => "assistant_message",
            CompanionEvent::Error { .. } => "error",
            CompanionEvent::Done { .. } => "done",
        }
    }
}
