use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per entity type, created on first use.
///
/// Holding the guard is what makes a load-mutate-flush span exclusive for that
/// type's backing file; different types never contend.
#[derive(Clone, Default)]
pub struct ResourceLocks {
    inner: Arc<DashMap<&'static str, Arc<Mutex<()>>>>,
}

impl ResourceLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `resource`.
    pub async fn acquire(&self, resource: &'static str) -> OwnedMutexGuard<()> {
        let lock = self
            .inner
            .entry(resource)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        lock.lock_owned().await
    }

    /// Number of entity types seen so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_resource_is_exclusive() {
        let locks = ResourceLocks::new();
        let guard = locks.acquire("Hero").await;

        let blocked = tokio::time::timeout(Duration::from_millis(50), locks.acquire("Hero")).await;
        assert!(blocked.is_err());

        drop(guard);
        let reacquired = tokio::time::timeout(Duration::from_millis(500), locks.acquire("Hero")).await;
        assert!(reacquired.is_ok());
    }

    #[tokio::test]
    async fn different_resources_do_not_contend() {
        let locks = ResourceLocks::new();
        let _hero = locks.acquire("Hero").await;
        let villain = tokio::time::timeout(Duration::from_millis(500), locks.acquire("Villain")).await;
        assert!(villain.is_ok());
        assert_eq!(locks.len(), 2);
    }

    #[tokio::test]
    async fn clones_share_the_registry() {
        let locks = ResourceLocks::new();
        let other = locks.clone();
        let _guard = locks.acquire("Hero").await;
        let blocked = tokio::time::timeout(Duration::from_millis(50), other.acquire("Hero")).await;
        assert!(blocked.is_err());
    }
}
