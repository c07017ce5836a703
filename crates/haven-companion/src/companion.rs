use haven_content::respond;
use haven_persist::{Result, Storage};
use haven_types::{Chat, ChatId, Mood, User};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use crate::chat_store::ChatStore;
use crate::config::CompanionConfig;
use crate::events::CompanionEvent;
use crate::session::SessionStore;

struct CompanionState {
    session: SessionStore,
    chats: ChatStore,
    /// Bumped whenever `chats` is replaced; pending replies carry the value
    /// they were sent under.
    generation: u64,
}

impl CompanionState {
    fn replace_chats(&mut self, chats: ChatStore) {
        self.chats = chats;
        self.generation += 1;
    }
}

/// The single owner of session and chat state.
///
/// Cloning is cheap; all clones share the same state and every mutation is
/// serialized through one lock.
#[derive(Clone)]
pub struct Companion {
    state: Arc<Mutex<CompanionState>>,
    storage: Storage,
    config: CompanionConfig,
}

impl Companion {
    /// Restore the persisted session (if any) and its chats
    pub async fn open(storage: Storage, config: CompanionConfig) -> Result<Self> {
        let session = SessionStore::restore(storage.clone()).await?;
        let owner = session.current().map(|u| u.id.clone());
        let chats = ChatStore::load(storage.clone(), owner).await?;

        Ok(Self {
            state: Arc::new(Mutex::new(CompanionState {
                session,
                chats,
                generation: 0,
            })),
            storage,
            config,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn config(&self) -> &CompanionConfig {
        &self.config
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.lock().await.session.current().cloned()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        // Simulated round trip; taken before the lock so replies keep flowing.
        tokio::time::sleep(self.config.auth_latency).await;
        let mut state = self.state.lock().await;
        let user = state.session.sign_in(email, password).await?;
        let chats = ChatStore::load(self.storage.clone(), Some(user.id.clone())).await?;
        state.replace_chats(chats);
        Ok(user)
    }

    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<User> {
        tokio::time::sleep(self.config.auth_latency).await;
        let mut state = self.state.lock().await;
        let user = state.session.sign_up(email, password, name).await?;
        let chats = ChatStore::load(self.storage.clone(), Some(user.id.clone())).await?;
        state.replace_chats(chats);
        Ok(user)
    }

    /// End the session, erasing its persisted chats
    pub async fn sign_out(&self) -> Result<Option<User>> {
        let mut state = self.state.lock().await;
        let user = state.session.sign_out().await?;
        state.replace_chats(ChatStore::anonymous(self.storage.clone()));
        Ok(user)
    }

    pub async fn chats(&self) -> Vec<Chat> {
        self.state.lock().await.chats.chats().to_vec()
    }

    pub async fn chat(&self, chat_id: &str) -> Option<Chat> {
        self.state.lock().await.chats.chat(chat_id).cloned()
    }

    pub async fn current_chat_id(&self) -> Option<ChatId> {
        self.state
            .lock()
            .await
            .chats
            .current_chat_id()
            .map(str::to_string)
    }

    pub async fn current_chat(&self) -> Option<Chat> {
        self.state.lock().await.chats.current_chat().cloned()
    }

    pub async fn is_composing(&self) -> bool {
        self.state.lock().await.chats.is_composing()
    }

    pub async fn create_chat(&self) -> Result<ChatId> {
        self.state.lock().await.chats.create_chat().await
    }

    pub async fn select_chat(&self, chat_id: &str) -> Result<bool> {
        self.state.lock().await.chats.select_chat(chat_id).await
    }

    pub async fn delete_chat(&self, chat_id: &str) -> Result<bool> {
        self.state.lock().await.chats.delete_chat(chat_id).await
    }

    /// Store a user message and schedule the assistant's reply.
    ///
    /// Returns `None` when the text is blank or the chat does not exist; in
    /// that case nothing was changed. Otherwise the returned receiver yields
    /// the events of this exchange and closes after [`CompanionEvent::Done`].
    /// The reply cannot be cancelled: it is appended to `chat_id` even if the
    /// selection moves on or the chat is deleted in the meantime. It is
    /// dropped only when the session changed, since sign-in and sign-out
    /// erase the scope it belonged to.
    ///
    /// Progress events are best effort; a full channel never holds up the
    /// reply itself.
    pub async fn send_message(
        &self,
        chat_id: &str,
        text: &str,
        mood: Option<Mood>,
    ) -> Result<Option<mpsc::Receiver<CompanionEvent>>> {
        let (user_message, generation) = {
            let mut state = self.state.lock().await;
            let Some(message) = state.chats.append_user_message(chat_id, text, mood).await? else {
                tracing::debug!(chat_id = %chat_id, "Ignoring empty message or unknown chat");
                return Ok(None);
            };
            state.chats.begin_composing(chat_id);
            (message, state.generation)
        };

        let (tx, rx) = mpsc::channel(self.config.event_buffer);
        let delay = self.config.sample_reply_delay();
        let state = Arc::clone(&self.state);
        let chat_id = chat_id.to_string();

        tracing::info!(
            chat_id = %chat_id,
            mood = ?mood,
            delay_ms = delay.as_millis() as u64,
            "Message received, composing reply"
        );

        tokio::spawn(async move {
            let prompt = user_message.text.clone();
            emit(
                &tx,
                CompanionEvent::UserMessage {
                    chat_id: chat_id.clone(),
                    message: user_message,
                },
            );
            emit(
                &tx,
                CompanionEvent::Composing {
                    chat_id: chat_id.clone(),
                },
            );

            tokio::time::sleep(delay).await;
            let reply = respond(&prompt, mood);

            let appended = {
                let mut state = state.lock().await;
                if state.generation != generation {
                    tracing::debug!(chat_id = %chat_id, "Session changed before reply, discarding");
                    Ok(None)
                } else {
                    let appended = state
                        .chats
                        .append_assistant_message(&chat_id, reply.body, reply.category)
                        .await;
                    state.chats.finish_composing(&chat_id);
                    appended
                }
            };

            let event = match appended {
                Ok(Some(message)) => Some(CompanionEvent::AssistantMessage {
                    chat_id: chat_id.clone(),
                    message,
                }),
                Ok(None) => None,
                Err(e) => {
                    tracing::error!(chat_id = %chat_id, "Failed to store reply: {}", e);
                    Some(CompanionEvent::Error {
                        chat_id: chat_id.clone(),
                        message: e.to_string(),
                    })
                }
            };
            if let Some(event) = event {
                let _ = tx.send(event).await;
            }
            let _ = tx.send(CompanionEvent::Done { chat_id }).await;
        });

        Ok(Some(rx))
    }

    /// Send to the selected chat, creating and selecting one first if needed.
    ///
    /// Blank text is ignored before any chat is created.
    pub async fn send_to_current(
        &self,
        text: &str,
        mood: Option<Mood>,
    ) -> Result<Option<(ChatId, mpsc::Receiver<CompanionEvent>)>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let chat_id = {
            let mut state = self.state.lock().await;
            let selected = state.chats.current_chat_id().map(str::to_string);
            match selected {
                Some(id) => id,
                None => state.chats.create_chat().await?,
            }
        };

        let rx = self.send_message(&chat_id, text, mood).await?;
        Ok(rx.map(|rx| (chat_id, rx)))
    }
}

/// Send a progress event without waiting for room in the channel
fn emit(tx: &mpsc::Sender<CompanionEvent>, event: CompanionEvent) {
    if let Err(e) = tx.try_send(event) {
        tracing::debug!(event = e.into_inner().name(), "Event channel full or closed, dropping");
    }
}
