//! The process-wide session map.

use std::collections::HashMap;
use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use ghosted_core::profile::StyleProfile;

use crate::error::SessionError;
use crate::session::Session;

/// Handle to one live session. Handlers lock it for the duration of a
/// read-modify-write sequence, which serializes appends per session.
pub type SessionHandle = Arc<Mutex<Session>>;

struct Entry {
    handle: SessionHandle,
    last_used: Timestamp,
}

/// Bounded in-process session map with TTL expiry and LRU eviction.
///
/// Sessions are never persisted; a restart forgets everything.
pub struct SessionStore {
    entries: Mutex<HashMap<String, Entry>>,
    capacity: usize,
    ttl: SignedDuration,
}

impl SessionStore {
    pub fn new(capacity: usize, ttl: SignedDuration) -> Self {
        SessionStore {
            entries: Mutex::new(HashMap::new()),
            capacity,
            ttl,
        }
    }

    /// Create a session seeded with the persona's opening message and
    /// return its identifier.
    ///
    /// Expired entries are purged first; if the store is still at capacity,
    /// the least recently used session is evicted.
    pub async fn create(&self, system: String, profile: StyleProfile, opening: String) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone(), system, profile, opening);
        let now = Timestamp::now();

        let mut entries = self.entries.lock().await;

        entries.retain(|_, entry| now.duration_since(entry.last_used) <= self.ttl);

        while entries.len() >= self.capacity {
            let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(key, _)| key.clone())
            else {
                break;
            };
            entries.remove(&oldest);
            info!(session_id = %oldest, "evicted least recently used session");
        }

        entries.insert(
            id.clone(),
            Entry {
                handle: Arc::new(Mutex::new(session)),
                last_used: now,
            },
        );

        info!(session_id = %id, sessions = entries.len(), "session created");

        id
    }

    /// Look up a session by exact identifier and refresh its usage time.
    ///
    /// An expired session is removed here and reported as not found, which
    /// is indistinguishable from a session that never existed.
    pub async fn get(&self, id: &str) -> Result<SessionHandle, SessionError> {
        let mut entries = self.entries.lock().await;
        let now = Timestamp::now();

        match entries.get_mut(id) {
            Some(entry) if now.duration_since(entry.last_used) <= self.ttl => {
                entry.last_used = now;
                Ok(Arc::clone(&entry.handle))
            }
            Some(_) => {
                entries.remove(id);
                info!(session_id = %id, "session expired");
                Err(SessionError::NotFound { id: id.to_string() })
            }
            None => Err(SessionError::NotFound { id: id.to_string() }),
        }
    }

    /// Number of live (possibly expired but not yet purged) sessions.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
