//! Logical storage keys. Chat state is scoped by user id.

pub const SESSION_KEY: &str = "session";

pub fn chats_key(user_id: &str) -> String {
    format!("chats:{}", user_id)
}

pub fn current_chat_key(user_id: &str) -> String {
    format!("current_chat:{}", user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_scoped() {
        assert_eq!(chats_key("u1"), "chats:u1");
        assert_eq!(current_chat_key("u1"), "current_chat:u1");
        assert_ne!(chats_key("u1"), chats_key("u2"));
    }
}
