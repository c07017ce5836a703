//! Mock authentication.
//!
//! Any credentials are accepted. The store only guarantees a stable user id
//! for the lifetime of a session.

use haven_persist::keys::{chats_key, current_chat_key, SESSION_KEY};
use haven_persist::{Result, Storage};
use haven_types::User;

pub struct SessionStore {
    storage: Storage,
    user: Option<User>,
}

impl SessionStore {
    /// Load the persisted session, if any
    pub async fn restore(storage: Storage) -> Result<Self> {
        let user: Option<User> = storage.get_json(SESSION_KEY).await?;
        if let Some(ref user) = user {
            tracing::info!(user_id = %user.id, "Session restored");
        }
        Ok(Self { storage, user })
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Start a session named after the local part of `email`
    pub async fn sign_in(&mut self, email: &str, _password: &str) -> Result<User> {
        let name = User::name_from_email(email).to_string();
        self.start(User::new(email, name)).await
    }

    pub async fn sign_up(&mut self, email: &str, _password: &str, name: &str) -> Result<User> {
        self.start(User::new(email, name)).await
    }

    /// End the session and erase everything stored in its scope.
    ///
    /// Returns the user that was signed in. On a storage error the session
    /// stays as it was.
    pub async fn sign_out(&mut self) -> Result<Option<User>> {
        self.storage.remove(SESSION_KEY).await?;
        if let Some(ref user) = self.user {
            self.erase_scope(&user.id).await?;
            tracing::info!(user_id = %user.id, "Signed out");
        }
        Ok(self.user.take())
    }

    /// Replaces any current session; the previous user's scope is erased first.
    async fn start(&mut self, user: User) -> Result<User> {
        if let Some(ref previous) = self.user {
            self.erase_scope(&previous.id).await?;
            tracing::info!(user_id = %previous.id, "Previous session replaced");
        }
        self.storage.set_json(SESSION_KEY, &user).await?;
        tracing::info!(user_id = %user.id, email = %user.email, "Signed in");
        self.user = Some(user.clone());
        Ok(user)
    }

    async fn erase_scope(&self, user_id: &str) -> Result<()> {
        self.storage.remove(&chats_key(user_id)).await?;
        self.storage.remove(&current_chat_key(user_id)).await
    }
}
