pub mod chat_store;
pub mod companion;
pub mod config;
pub mod events;
pub mod session;

pub use chat_store::ChatStore;
pub use companion::Companion;
pub use config::CompanionConfig;
pub use events::CompanionEvent;
pub use session::SessionStore;
