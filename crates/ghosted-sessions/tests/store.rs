use std::time::Duration;

use jiff::SignedDuration;

use ghosted_core::message::{ChatRole, ContentPart, MessageContent};
use ghosted_core::profile::StyleProfile;
use ghosted_sessions::{SessionError, SessionStore, MAX_CONTEXT};

fn profile() -> StyleProfile {
    StyleProfile::from_model_output(r#"{"tone":"dry","opening_line":"hey you"}"#)
}

fn store(capacity: usize, ttl_secs: i64) -> SessionStore {
    SessionStore::new(capacity, SignedDuration::from_secs(ttl_secs))
}

#[tokio::test]
async fn create_and_get_round_trip() {
    let store = store(16, 600);
    let id = store
        .create("system prompt".to_string(), profile(), "hey you".to_string())
        .await;

    let handle = store.get(&id).await.unwrap();
    let session = handle.lock().await;

    assert_eq!(session.id, id);
    assert_eq!(session.system, "system prompt");
    assert_eq!(session.messages.len(), 1);
    assert_eq!(session.messages[0].role, ChatRole::Assistant);
    assert_eq!(
        session.messages[0].content,
        MessageContent::Text("hey you".to_string())
    );
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let store = store(16, 600);
    let result = store.get("b1946ac9-2492-4b2f-8f5e-000000000000").await;
    assert!(matches!(result, Err(SessionError::NotFound { .. })));
}

#[tokio::test]
async fn history_is_never_truncated_but_the_window_is() {
    let store = store(16, 600);
    let id = store
        .create("system".to_string(), profile(), "hey".to_string())
        .await;

    let handle = store.get(&id).await.unwrap();
    let mut session = handle.lock().await;

    for i in 0..45 {
        session.push(
            ChatRole::User,
            MessageContent::Parts(vec![ContentPart::Text {
                text: format!("msg {i}"),
            }]),
        );
    }

    assert_eq!(session.messages.len(), 46);

    let window = session.context_window();
    assert_eq!(window.len(), MAX_CONTEXT);
    assert_eq!(
        window[0].content,
        MessageContent::Parts(vec![ContentPart::Text {
            text: "msg 25".to_string()
        }])
    );
}

#[tokio::test]
async fn short_histories_fit_in_the_window_whole() {
    let store = store(16, 600);
    let id = store
        .create("system".to_string(), profile(), "hey".to_string())
        .await;

    let handle = store.get(&id).await.unwrap();
    let session = handle.lock().await;
    assert_eq!(session.context_window().len(), 1);
}

#[tokio::test]
async fn capacity_evicts_the_least_recently_used_session() {
    let store = store(2, 600);

    let first = store
        .create("s1".to_string(), profile(), "hey".to_string())
        .await;
    std::thread::sleep(Duration::from_millis(2));
    let second = store
        .create("s2".to_string(), profile(), "hey".to_string())
        .await;
    std::thread::sleep(Duration::from_millis(2));

    // Touch the first session so the second becomes the LRU candidate.
    store.get(&first).await.unwrap();
    std::thread::sleep(Duration::from_millis(2));

    let third = store
        .create("s3".to_string(), profile(), "hey".to_string())
        .await;

    assert_eq!(store.len().await, 2);
    assert!(store.get(&first).await.is_ok());
    assert!(store.get(&third).await.is_ok());
    assert!(matches!(
        store.get(&second).await,
        Err(SessionError::NotFound { .. })
    ));
}

#[tokio::test]
async fn expired_sessions_are_not_found() {
    let store = store(16, 0);
    let id = store
        .create("system".to_string(), profile(), "hey".to_string())
        .await;

    std::thread::sleep(Duration::from_millis(2));

    assert!(matches!(
        store.get(&id).await,
        Err(SessionError::NotFound { .. })
    ));
}

#[tokio::test]
async fn create_purges_expired_sessions() {
    let store = store(16, 0);
    store
        .create("s1".to_string(), profile(), "hey".to_string())
        .await;
    std::thread::sleep(Duration::from_millis(2));
    store
        .create("s2".to_string(), profile(), "hey".to_string())
        .await;

    // The first entry was expired and purged during the second create.
    assert_eq!(store.len().await, 1);
}
