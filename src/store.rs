use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shareable store for the most recently submitted form body
///
/// Holds at most one JSON snapshot. Each write replaces the whole value, so
/// concurrent writers serialize on the lock and the last writer wins.
/// The snapshot is in-memory only and lost on restart.
#[derive(Clone, Default)]
pub struct FormStore {
    inner: Arc<RwLock<Option<JsonValue>>>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored snapshot, returning the previous one if any
    pub async fn replace(&self, value: JsonValue) -> Option<JsonValue> {
        self.inner.write().await.replace(value)
    }

    /// The most recently stored snapshot, or `None` before the first write
    pub async fn current(&self) -> Option<JsonValue> {
        self.inner.read().await.clone()
    }
}
