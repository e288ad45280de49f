//! In-memory whisper store with per-entry expiry timers.
//!
//! Each inserted whisper gets a tokio task that removes it once its TTL elapses. `expire` removes
//! a whisper early and cancels its timer. Entries are versioned so a timer that already fired
//! never removes an entry re-inserted under the same id.

use crate::whisper::{Whisper, WhisperId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

struct Entry {
    whisper: Whisper,
    generation: u64,
    timer: JoinHandle<()>,
}

type Entries = RwLock<HashMap<String, Entry>>;

/// Cloneable handle to the shared whisper map.
#[derive(Clone, Default)]
pub struct WhisperStore {
    entries: Arc<Entries>,
    generation: Arc<AtomicU64>,
}

impl WhisperStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `whisper` under `id` and schedules its removal after `ttl`.
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self, id, whisper), fields(whisper_id = %id))]
    pub async fn insert(&self, id: WhisperId, whisper: Whisper, ttl: Duration) {
        let key = id.to_string();
        let generation = self.generation.fetch_add(1, Ordering::Relaxed);

        // The timer is spawned under the write lock so it cannot look up the key before it exists.
        let mut entries = self.entries.write().await;
        let timer = tokio::spawn(expire_after(
            Arc::downgrade(&self.entries),
            key.clone(),
            generation,
            ttl,
        ));
        let previous = entries.insert(
            key,
            Entry {
                whisper,
                generation,
                timer,
            },
        );
        drop(entries);

        if let Some(previous) = previous {
            previous.timer.abort();
        }
        debug!(ttl_secs = ttl.as_secs(), "Whisper stored");
    }

    /// Returns a copy of the whisper if it is still live.
    pub async fn get(&self, id: &str) -> Option<Whisper> {
        self.entries
            .read()
            .await
            .get(id)
            .map(|entry| entry.whisper.clone())
    }

    /// Removes the whisper now and cancels its timer. Returns it if it was still live.
    #[instrument(skip(self))]
    pub async fn expire(&self, id: &str) -> Option<Whisper> {
        let entry = self.entries.write().await.remove(id)?;
        entry.timer.abort();
        debug!(whisper = ?entry.whisper, "Whisper expired on request");
        Some(entry.whisper)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

async fn expire_after(entries: Weak<Entries>, key: String, generation: u64, ttl: Duration) {
    tokio::time::sleep(ttl).await;
    let Some(entries) = entries.upgrade() else {
        return;
    };
    let mut entries = entries.write().await;
    if entries.get(&key).map(|e| e.generation) == Some(generation) {
        if let Some(entry) = entries.remove(&key) {
            debug!(whisper_id = %key, whisper = ?entry.whisper, "Whisper expired");
        }
    }
}
