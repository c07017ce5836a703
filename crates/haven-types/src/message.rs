use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Mood;

pub type MessageId = String;

/// One turn in a chat. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MessageCategory>,
}

impl Message {
    pub fn user(text: impl Into<String>, mood: Option<Mood>) -> Self {
        Self {
            id: crate::new_id(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            mood,
            category: None,
        }
    }

    pub fn assistant(text: impl Into<String>, category: MessageCategory) -> Self {
        Self {
            id: crate::new_id(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            mood: None,
            category: Some(category),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    #[serde(alias = "ai")]
    Assistant,
}

/// Classification of an assistant message, used by clients to pick the
/// widget shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    #[serde(alias = "text")]
    Plain,
    Tip,
    Exercise,
    Quote,
    Activity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_aliases() {
        let json = r#"{
            "id": "1",
            "text": "hello",
            "sender": "ai",
            "timestamp": "2024-05-01T10:00:00Z",
            "category": "text"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender, Sender::Assistant);
        assert_eq!(msg.category, Some(MessageCategory::Plain));
        assert_eq!(msg.mood, None);
    }

    #[test]
    fn test_user_message_omits_category() {
        let msg = Message::user("hi", Some(Mood::Calm));
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"user\""));
        assert!(json.contains("\"mood\":\"calm\""));
        assert!(!json.contains("category"));
    }
}
