use async_trait::async_trait;
use haven_companion::SessionStore;
use haven_persist::keys::{chats_key, current_chat_key, SESSION_KEY};
use haven_persist::{KeyValueStore, MemoryStore, PersistError, Storage};
use haven_types::User;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Memory store whose removals can be switched to fail
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_removes: AtomicBool,
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> haven_persist::Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> haven_persist::Result<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> haven_persist::Result<()> {
        if self.fail_removes.load(Ordering::SeqCst) {
            return Err(PersistError::Connection("store unavailable".to_string()));
        }
        self.inner.remove(key).await
    }

    fn backend_name(&self) -> &'static str {
        "flaky"
    }
}

#[tokio::test]
async fn test_sign_in_derives_name_from_email() {
    let mut session = SessionStore::restore(Storage::in_memory()).await.unwrap();
    assert!(!session.is_signed_in());

    let user = session.sign_in("river.song@example.com", "anything").await.unwrap();
    assert_eq!(user.name, "river.song");
    assert_eq!(user.email, "river.song@example.com");
    assert!(!user.id.is_empty());
    assert_eq!(session.current(), Some(&user));
}

#[tokio::test]
async fn test_sign_up_uses_given_name() {
    let mut session = SessionStore::restore(Storage::in_memory()).await.unwrap();
    let user = session.sign_up("sam@example.com", "", "Sam Tyler").await.unwrap();
    assert_eq!(user.name, "Sam Tyler");
}

#[tokio::test]
async fn test_session_is_restored() {
    let storage = Storage::in_memory();
    let mut session = SessionStore::restore(storage.clone()).await.unwrap();
    let user = session.sign_in("kim@example.com", "pw").await.unwrap();

    let restored = SessionStore::restore(storage).await.unwrap();
    assert_eq!(restored.current(), Some(&user));
}

#[tokio::test]
async fn test_sign_out_erases_scope() {
    let storage = Storage::in_memory();
    let mut session = SessionStore::restore(storage.clone()).await.unwrap();
    let user = session.sign_in("kim@example.com", "pw").await.unwrap();

    storage.set_json(&chats_key(&user.id), &Vec::<String>::new()).await.unwrap();
    storage.set_json(&current_chat_key(&user.id), "chat-1").await.unwrap();

    let signed_out = session.sign_out().await.unwrap();
    assert_eq!(signed_out, Some(user.clone()));
    assert!(!session.is_signed_in());

    let stored_user: Option<User> = storage.get_json(SESSION_KEY).await.unwrap();
    assert!(stored_user.is_none());
    let chats: Option<Vec<String>> = storage.get_json(&chats_key(&user.id)).await.unwrap();
    assert!(chats.is_none());
    let current: Option<String> = storage.get_json(&current_chat_key(&user.id)).await.unwrap();
    assert!(current.is_none());
}

#[tokio::test]
async fn test_sign_out_when_signed_out() {
    let mut session = SessionStore::restore(Storage::in_memory()).await.unwrap();
    assert_eq!(session.sign_out().await.unwrap(), None);
}

#[tokio::test]
async fn test_sign_in_over_session_erases_previous_scope() {
    let storage = Storage::in_memory();
    let mut session = SessionStore::restore(storage.clone()).await.unwrap();
    let first = session.sign_in("kim@example.com", "pw").await.unwrap();
    storage.set_json(&chats_key(&first.id), &vec!["chat-1"]).await.unwrap();
    storage.set_json(&current_chat_key(&first.id), "chat-1").await.unwrap();

    let second = session.sign_in("lee@example.com", "pw").await.unwrap();
    assert_eq!(session.current(), Some(&second));

    let chats: Option<Vec<String>> = storage.get_json(&chats_key(&first.id)).await.unwrap();
    assert!(chats.is_none());
    let current: Option<String> = storage.get_json(&current_chat_key(&first.id)).await.unwrap();
    assert!(current.is_none());
    let stored_user: Option<User> = storage.get_json(SESSION_KEY).await.unwrap();
    assert_eq!(stored_user, Some(second));
}

#[tokio::test]
async fn test_failed_sign_out_keeps_session() {
    let backing = Arc::new(FlakyStore::default());
    let storage = Storage::new(backing.clone());
    let mut session = SessionStore::restore(storage.clone()).await.unwrap();
    let user = session.sign_up("kim@example.com", "pw", "Kim").await.unwrap();

    backing.fail_removes.store(true, Ordering::SeqCst);
    assert!(session.sign_out().await.is_err());
    assert_eq!(session.current(), Some(&user));

    backing.fail_removes.store(false, Ordering::SeqCst);
    assert_eq!(session.sign_out().await.unwrap(), Some(user));
    assert!(!session.is_signed_in());
}
