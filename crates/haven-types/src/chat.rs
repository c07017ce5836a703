use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Message;

pub type ChatId = String;

pub const DEFAULT_CHAT_TITLE: &str = "New Chat";
pub const TITLE_MAX_CHARS: usize = 30;

/// A named, ordered thread of messages belonging to one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chat {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: crate::new_id(),
            title: DEFAULT_CHAT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a message, refreshing `updated_at`.
    ///
    /// The title is derived from the first message only when that message
    /// comes from the user; it is never recomputed afterwards.
    pub fn push(&mut self, message: Message) {
        if self.messages.is_empty() && message.is_from_user() {
            self.title = derive_title(&message.text);
        }
        self.messages.push(message);
        self.updated_at = Utc::now();
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for Chat {
    fn default() -> Self {
        Self::new()
    }
}

/// First [`TITLE_MAX_CHARS`] characters of `text`, with an ellipsis when cut.
pub fn derive_title(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}
