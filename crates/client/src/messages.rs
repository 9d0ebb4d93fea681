use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

/// Append-only list of human-readable lines shown in the messages panel.
/// Clones share the same list.
#[derive(Clone, Default)]
pub struct MessageLog {
    inner: Arc<RwLock<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "message logged");
        self.inner.write().await.push(message);
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    pub async fn messages(&self) -> Vec<String> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
