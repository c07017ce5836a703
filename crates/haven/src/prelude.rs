//! Prelude module for convenient imports
//!
//! ```rust
//! use haven::prelude::*;
//! ```

pub use crate::{
    Chat, ChatId, Message, MessageCategory, Mood, Sender, User,
    BreathPhase, BreathingSession, Reply,
    Storage, StorageBackend, StorageBuilder, PersistError,
    Companion, CompanionConfig, CompanionEvent,
};
