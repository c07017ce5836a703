pub mod auth;
pub mod chats;
pub mod content;
pub mod health;
pub mod messages;
