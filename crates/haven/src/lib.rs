//! # Haven
//!
//! A mental-wellness chat companion. Users sign in, keep a list of chats and
//! talk to a scripted assistant that answers with tips, quotes, activities and
//! guided breathing exercises.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use haven::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let storage = StorageBuilder::new()
//!         .backend(StorageBackend::File)
//!         .data_dir("./data")
//!         .build()
//!         .await?;
//!
//!     let companion = Companion::open(storage, CompanionConfig::default()).await?;
//!     companion.sign_in("jane@example.com", "anything").await?;
//!
//!     if let Some((_chat_id, mut events)) = companion
//!         .send_to_current("I feel a bit anxious", Some(Mood::Anxious))
//!         .await?
//!     {
//!         while let Some(event) = events.recv().await {
//!             if let CompanionEvent::AssistantMessage { message, .. } = event {
//!                 println!("{}", message.text);
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`haven-types`**: users, chats, messages and moods
//! - **`haven-content`**: content library, response generator, breathing player
//! - **`haven-persist`**: key-value storage (memory, JSON files, MongoDB)
//! - **`haven-companion`**: session, chat store and the reply scheduler
//!
//! ## License
//!
//! MIT

pub mod prelude;

pub use haven_types::{
    derive_title, new_id, Chat, ChatId, Message, MessageCategory, MessageId, Mood,
    ParseMoodError, Sender, User, UserId, DEFAULT_CHAT_TITLE, TITLE_MAX_CHARS,
};

pub use haven_content::{
    find_exercise, mood_response, respond, respond_with, BreathPhase, BreathingExercise,
    BreathingSession, MoodResponse, Reply, ACTIVITIES, EXERCISES, QUOTES, SUPPORTIVE_RESPONSES,
    TIPS,
};

pub use haven_persist::keys as storage_keys;

pub use haven_persist::{
    FileStore, KeyValueStore, MemoryStore, PersistError, Storage, StorageBackend, StorageBuilder,
};

#[cfg(feature = "mongodb")]
pub use haven_persist::MongoStore;

pub use haven_companion::{ChatStore, Companion, CompanionConfig, CompanionEvent, SessionStore};
