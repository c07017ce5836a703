use haven_persist::keys::{chats_key, current_chat_key};
use haven_persist::{Result, Storage};
use haven_types::{Chat, ChatId, Message, MessageCategory, Mood, UserId};
use std::collections::HashMap;

/// Ordered chat threads of one owner plus the current selection.
///
/// Chats are kept most-recent-first. Every mutation writes the whole
/// collection back to storage, unless the store has no owner, in which case
/// nothing is ever written.
///
/// A chat deleted while a reply to it is still pending is held aside and
/// put back, reply included, when that reply arrives.
pub struct ChatStore {
    storage: Storage,
    owner: Option<UserId>,
    chats: Vec<Chat>,
    current: Option<ChatId>,
    pending_replies: HashMap<ChatId, usize>,
    awaiting_reply: HashMap<ChatId, Chat>,
}

impl ChatStore {
    /// A store with no owner; it keeps state in memory only
    pub fn anonymous(storage: Storage) -> Self {
        Self {
            storage,
            owner: None,
            chats: Vec::new(),
            current: None,
            pending_replies: HashMap::new(),
            awaiting_reply: HashMap::new(),
        }
    }

    /// Open the store for `owner`, reading any persisted chats.
    ///
    /// A persisted selection that no longer matches a chat is dropped.
    pub async fn load(storage: Storage, owner: Option<UserId>) -> Result<Self> {
        let Some(owner) = owner else {
            return Ok(Self::anonymous(storage));
        };

        let chats: Vec<Chat> = storage
            .get_json(&chats_key(&owner))
            .await?
            .unwrap_or_default();
        let mut current: Option<ChatId> = storage.get_json(&current_chat_key(&owner)).await?;

        if let Some(ref id) = current {
            if !chats.iter().any(|c| &c.id == id) {
                tracing::warn!(chat_id = %id, "Dropping selection of missing chat");
                current = None;
            }
        }

        tracing::debug!(user_id = %owner, chats = chats.len(), "Chat store loaded");
        Ok(Self {
            storage,
            owner: Some(owner),
            chats,
            current,
            pending_replies: HashMap::new(),
            awaiting_reply: HashMap::new(),
        })
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn chat(&self, chat_id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == chat_id)
    }

    pub fn current_chat_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_chat(&self) -> Option<&Chat> {
        self.current.as_deref().and_then(|id| self.chat(id))
    }

    /// True while at least one reply is pending
    pub fn is_composing(&self) -> bool {
        !self.pending_replies.is_empty()
    }

    /// Record that a reply to `chat_id` is on its way
    pub fn begin_composing(&mut self, chat_id: &str) {
        *self.pending_replies.entry(chat_id.to_string()).or_insert(0) += 1;
    }

    /// Record that a reply to `chat_id` arrived (or was given up)
    pub fn finish_composing(&mut self, chat_id: &str) {
        let Some(count) = self.pending_replies.get_mut(chat_id) else {
            return;
        };
        *count -= 1;
        if *count == 0 {
            self.pending_replies.remove(chat_id);
            self.awaiting_reply.remove(chat_id);
        }
    }

    /// Insert an empty chat at the front and select it
    pub async fn create_chat(&mut self) -> Result<ChatId> {
        let chat = Chat::new();
        let id = chat.id.clone();
        self.chats.insert(0, chat);
        self.current = Some(id.clone());

        self.persist_chats().await?;
        self.persist_selection().await?;
        tracing::debug!(chat_id = %id, "Chat created");
        Ok(id)
    }

    /// Append a user message.
    ///
    /// Returns `None` without touching anything when the trimmed text is empty
    /// or the chat does not exist.
    pub async fn append_user_message(
        &mut self,
        chat_id: &str,
        text: &str,
        mood: Option<Mood>,
    ) -> Result<Option<Message>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        self.append(chat_id, Message::user(text, mood)).await
    }

    /// Append an assistant reply.
    ///
    /// If the chat was deleted while this reply was pending it is restored at
    /// the front of the list with the reply appended. `None` only when the
    /// chat is unknown to this store.
    pub async fn append_assistant_message(
        &mut self,
        chat_id: &str,
        text: impl Into<String>,
        category: MessageCategory,
    ) -> Result<Option<Message>> {
        let message = Message::assistant(text, category);
        if self.chat(chat_id).is_none() {
            let Some(chat) = self.awaiting_reply.remove(chat_id) else {
                return Ok(None);
            };
            tracing::debug!(chat_id = %chat_id, "Restoring deleted chat for pending reply");
            self.chats.insert(0, chat);
        }
        self.append(chat_id, message).await
    }

    async fn append(&mut self, chat_id: &str, message: Message) -> Result<Option<Message>> {
        let Some(chat) = self.chats.iter_mut().find(|c| c.id == chat_id) else {
            return Ok(None);
        };
        chat.push(message.clone());
        self.persist_chats().await?;
        Ok(Some(message))
    }

    /// Remove a chat. When it was selected, the most recent remaining chat
    /// becomes current, or the selection is cleared.
    ///
    /// Returns false when no such chat exists.
    pub async fn delete_chat(&mut self, chat_id: &str) -> Result<bool> {
        let Some(index) = self.chats.iter().position(|c| c.id == chat_id) else {
            return Ok(false);
        };
        let removed = self.chats.remove(index);
        if self.pending_replies.contains_key(chat_id) {
            self.awaiting_reply.insert(removed.id.clone(), removed);
        }
        self.persist_chats().await?;

        if self.current.as_deref() == Some(chat_id) {
            self.current = self.chats.first().map(|c| c.id.clone());
            self.persist_selection().await?;
        }
        tracing::debug!(chat_id = %chat_id, "Chat deleted");
        Ok(true)
    }

    /// Select an existing chat. Unknown ids leave the selection unchanged.
    pub async fn select_chat(&mut self, chat_id: &str) -> Result<bool> {
        if self.chat(chat_id).is_none() {
            return Ok(false);
        }
        self.current = Some(chat_id.to_string());
        self.persist_selection().await?;
        Ok(true)
    }

    async fn persist_chats(&self) -> Result<()> {
        let Some(ref owner) = self.owner else {
            return Ok(());
        };
        self.storage.set_json(&chats_key(owner), &self.chats).await
    }

    async fn persist_selection(&self) -> Result<()> {
        let Some(ref owner) = self.owner else {
            return Ok(());
        };
        let key = current_chat_key(owner);
        match self.current {
            Some(ref id) => self.storage.set_json(&key, id).await,
            None => self.storage.remove(&key).await,
        }
    }
}
