use std::{
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
};

use models::Resource;
use tokio::sync::OwnedMutexGuard;

use super::{json_list_store::JsonListStore, locks::ResourceLocks};

/// Per-process handle from which request handlers open stores.
///
/// Holds no entity data itself; every [`open`](Self::open) yields a fresh store
/// bound to `<data_dir>/<T::NAME>.json`.
#[derive(Clone)]
pub struct ResourceStores {
    data_dir: PathBuf,
    locks: ResourceLocks,
}

impl ResourceStores {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self { data_dir: data_dir.into(), locks: ResourceLocks::new() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Take the type's lock and open a store; the lock is released when the session drops.
    pub async fn open<T: Resource>(&self) -> StoreSession<T> {
        let guard = self.locks.acquire(T::NAME).await;
        StoreSession { store: JsonListStore::in_dir(&self.data_dir), _guard: guard }
    }
}

/// A store plus the exclusive lock on its file.
pub struct StoreSession<T> {
    store: JsonListStore<T>,
    _guard: OwnedMutexGuard<()>,
}

impl<T> Deref for StoreSession<T> {
    type Target = JsonListStore<T>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl<T> DerefMut for StoreSession<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.store
    }
}
