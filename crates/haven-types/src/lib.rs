mod chat;
mod message;
mod mood;
mod user;

pub use chat::{derive_title, Chat, ChatId, DEFAULT_CHAT_TITLE, TITLE_MAX_CHARS};
pub use message::{Message, MessageCategory, MessageId, Sender};
pub use mood::{Mood, ParseMoodError};
pub use user::{User, UserId};

/// Generate a fresh time-ordered identifier.
///
/// UUID v7 sorts by creation time, so ids double as a coarse creation order.
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
