use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
};

use models::Resource;
use serde::Serialize;
use tokio::fs;
use tracing::{debug, info};

use crate::errors::ServiceError;

/// Generic JSON file-backed list store for one entity type.
///
/// Keeps an ordered `Vec<T>` that mirrors a JSON array on disk. The file is read
/// lazily on first access and at most once per instance; a missing file is
/// created holding `[]`. Every mutation is staged on a copy of the list, flushed
/// with a write-then-rename, and only then committed to memory, so a failed
/// flush leaves both the file and the in-memory list untouched.
pub struct JsonListStore<T> {
    file_path: PathBuf,
    items: Option<Vec<T>>,
}

impl<T: Resource> JsonListStore<T> {
    /// Bind a store to an explicit file. No I/O happens until first access.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), items: None }
    }

    /// Bind a store to `<data_dir>/<T::NAME>.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(format!("{}.json", T::NAME)))
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    async fn loaded(&mut self) -> Result<&mut Vec<T>, ServiceError> {
        if self.items.is_none() {
            let items = load::<T>(&self.file_path).await?;
            self.items = Some(items);
        }
        Ok(self.items.get_or_insert_with(Vec::new))
    }

    /// All entities in stored order.
    pub async fn list(&mut self) -> Result<&[T], ServiceError> {
        let items = self.loaded().await?;
        Ok(items.as_slice())
    }

    /// First entity with the given id; `None` is the absence signal, not an error.
    pub async fn get_by_id(&mut self, id: u64) -> Result<Option<T>, ServiceError> {
        let items = self.loaded().await?;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    /// Append `item` under a fresh id (`max(id) + 1`, or 1 when empty) and flush.
    /// Whatever id the caller put on `item` is overwritten.
    pub async fn create(&mut self, mut item: T) -> Result<T, ServiceError> {
        let file_path = self.file_path.clone();
        let items = self.loaded().await?;
        let id = next_id(items)?;
        item.set_id(id);

        let mut staged = items.clone();
        staged.push(item.clone());
        write_atomic(&file_path, &staged).await?;
        *items = staged;

        debug!(resource = T::NAME, id, "entity created");
        Ok(item)
    }

    /// Replace the entity carrying `item`'s id in place. `false` when no such id.
    pub async fn update(&mut self, item: T) -> Result<bool, ServiceError> {
        let file_path = self.file_path.clone();
        let items = self.loaded().await?;
        let Some(index) = items.iter().position(|x| x.id() == item.id()) else {
            return Ok(false);
        };
        let id = item.id();

        let mut staged = items.clone();
        staged[index] = item;
        write_atomic(&file_path, &staged).await?;
        *items = staged;

        debug!(resource = T::NAME, id, index, "entity updated");
        Ok(true)
    }

    /// Remove the entity with `id`, closing the gap. `false` when no such id.
    pub async fn delete(&mut self, id: u64) -> Result<bool, ServiceError> {
        let file_path = self.file_path.clone();
        let items = self.loaded().await?;
        let Some(index) = items.iter().position(|x| x.id() == id) else {
            return Ok(false);
        };

        let mut staged = items.clone();
        staged.remove(index);
        write_atomic(&file_path, &staged).await?;
        *items = staged;

        debug!(resource = T::NAME, id, "entity deleted");
        Ok(true)
    }
}

fn next_id<T: Resource>(items: &[T]) -> Result<u64, ServiceError> {
    match items.iter().map(|item| item.id()).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| ServiceError::Storage(format!("{} id space exhausted", T::NAME))),
    }
}

async fn load<T: Resource>(path: &Path) -> Result<Vec<T>, ServiceError> {
    match fs::read(path).await {
        Ok(bytes) => {
            let items: Vec<T> = serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::storage(&format!("malformed store {}", path.display()), e))?;
            let mut seen = HashSet::with_capacity(items.len());
            for item in &items {
                let id = item.id();
                let problem = if id == 0 {
                    Some("id 0".to_string())
                } else if !seen.insert(id) {
                    Some(format!("duplicate id {id}"))
                } else {
                    item.check().err().map(|e| format!("id {id}: {e}"))
                };
                if let Some(problem) = problem {
                    return Err(ServiceError::Storage(format!(
                        "malformed store {}: {problem}",
                        path.display()
                    )));
                }
            }
            debug!(resource = T::NAME, count = items.len(), "store loaded");
            Ok(items)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ServiceError::storage(&format!("create {}", parent.display()), e))?;
            }
            let empty: Vec<T> = Vec::new();
            write_atomic(path, &empty).await?;
            info!(resource = T::NAME, path = %path.display(), "initialized empty store");
            Ok(empty)
        }
        Err(e) => Err(ServiceError::storage(&format!("read {}", path.display()), e)),
    }
}

async fn write_atomic<T: Serialize>(path: &Path, items: &[T]) -> Result<(), ServiceError> {
    let data = serde_json::to_vec(items).map_err(|e| ServiceError::storage("serialize store", e))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, data)
        .await
        .map_err(|e| ServiceError::storage(&format!("write {}", tmp_path.display()), e))?;
    fs::rename(&tmp_path, path)
        .await
        .map_err(|e| ServiceError::storage(&format!("rename onto {}", path.display()), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Hero;

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("json_list_store_{}", uuid::Uuid::new_v4()))
            .join("Hero.json")
    }

    async fn read_file(path: &Path) -> Result<Vec<Hero>, anyhow::Error> {
        let bytes = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            let _ = tokio::fs::remove_dir_all(dir).await;
        }
    }

    #[tokio::test]
    async fn first_access_creates_empty_file() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        let mut store = JsonListStore::<Hero>::new(&path);
        assert!(!store.is_loaded());
        assert!(tokio::fs::metadata(&path).await.is_err());

        assert!(store.list().await?.is_empty());
        assert!(store.is_loaded());
        assert_eq!(tokio::fs::read_to_string(&path).await?, "[]");

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn create_on_empty_store_assigns_id_one() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        let mut store = JsonListStore::<Hero>::new(&path);

        let created = store.create(Hero::new(42, "Metal Man")).await?;
        assert_eq!(created, Hero::new(1, "Metal Man"));
        assert_eq!(store.list().await?, &[Hero::new(1, "Metal Man")]);
        assert_eq!(read_file(&path).await?, vec![Hero::new(1, "Metal Man")]);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn file_is_read_once_per_instance() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        let mut store = JsonListStore::<Hero>::new(&path);
        store.create(Hero::new(0, "Firefly")).await?;

        tokio::fs::write(&path, serde_json::to_vec(&vec![Hero::new(9, "Other")])?).await?;
        assert_eq!(store.list().await?, &[Hero::new(1, "Firefly")]);

        let mut fresh = JsonListStore::<Hero>::new(&path);
        assert_eq!(fresh.list().await?, &[Hero::new(9, "Other")]);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_create_does_not_collide() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        let mut store = JsonListStore::<Hero>::new(&path);
        store.create(Hero::new(0, "A")).await?;
        store.create(Hero::new(0, "B")).await?;

        assert!(store.delete(1).await?);
        assert_eq!(store.list().await?, &[Hero::new(2, "B")]);

        let created = store.create(Hero::new(0, "C")).await?;
        assert_eq!(created.id, 3);
        assert_eq!(read_file(&path).await?, vec![Hero::new(2, "B"), Hero::new(3, "C")]);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn create_after_removing_tail_keeps_live_ids_unique() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        let mut store = JsonListStore::<Hero>::new(&path);
        store.create(Hero::new(0, "A")).await?;
        store.create(Hero::new(0, "B")).await?;

        assert!(store.delete(2).await?);
        let created = store.create(Hero::new(0, "C")).await?;
        let ids: Vec<u64> = store.list().await?.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, created.id]);
        assert_ne!(created.id, 1);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn create_uses_true_maximum_when_last_entry_is_not_largest() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await?;
        tokio::fs::write(&path, serde_json::to_vec(&vec![Hero::new(2, "B"), Hero::new(1, "A")])?).await?;

        let mut store = JsonListStore::<Hero>::new(&path);
        let created = store.create(Hero::new(0, "C")).await?;
        assert_eq!(created.id, 3);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn ids_stay_unique_across_mixed_operations() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        let mut store = JsonListStore::<Hero>::new(&path);
        for round in 0..5u64 {
            for n in 0..4 {
                store.create(Hero::new(0, format!("hero-{round}-{n}"))).await?;
            }
            let victim = store.list().await?[(round as usize) % 3].id;
            assert!(store.delete(victim).await?);

            let ids: Vec<u64> = store.list().await?.iter().map(|h| h.id).collect();
            let unique: HashSet<u64> = ids.iter().copied().collect();
            assert_eq!(unique.len(), ids.len());
            assert!(ids.iter().all(|id| *id >= 1));
        }

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_twice_reports_missing_second_time() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        let mut store = JsonListStore::<Hero>::new(&path);
        store.create(Hero::new(0, "A")).await?;
        store.create(Hero::new(0, "B")).await?;

        assert!(store.delete(1).await?);
        assert!(!store.delete(1).await?);
        assert_eq!(store.list().await?.len(), 1);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_in_place_or_reports_missing() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        let mut store = JsonListStore::<Hero>::new(&path);
        for name in ["A", "B", "C"] {
            store.create(Hero::new(0, name)).await?;
        }

        assert!(!store.update(Hero::new(99, "Ghost")).await?);
        assert_eq!(store.list().await?.len(), 3);

        assert!(store.update(Hero::new(2, "Bee")).await?);
        let expected = vec![Hero::new(1, "A"), Hero::new(2, "Bee"), Hero::new(3, "C")];
        assert_eq!(store.list().await?, expected.as_slice());
        assert_eq!(read_file(&path).await?, expected);

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn get_by_unknown_id_is_absent() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        let mut store = JsonListStore::<Hero>::new(&path);
        assert_eq!(store.get_by_id(999).await?, None);
        store.create(Hero::new(0, "A")).await?;
        assert_eq!(store.get_by_id(999).await?, None);
        assert_eq!(store.get_by_id(1).await?, Some(Hero::new(1, "A")));

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_is_a_storage_error() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await?;

        tokio::fs::write(&path, b"{not json").await?;
        let mut store = JsonListStore::<Hero>::new(&path);
        assert!(matches!(store.list().await, Err(ServiceError::Storage(_))));

        tokio::fs::write(&path, br#"[{"id":1,"name":"A"},{"id":1,"name":"B"}]"#).await?;
        let mut store = JsonListStore::<Hero>::new(&path);
        assert!(matches!(store.create(Hero::new(0, "C")).await, Err(ServiceError::Storage(_))));

        tokio::fs::write(&path, br#"[{"id":0,"name":"Zero"}]"#).await?;
        let mut store = JsonListStore::<Hero>::new(&path);
        assert!(matches!(store.list().await, Err(ServiceError::Storage(_))));

        tokio::fs::write(&path, br#"[{"id":1,"name":"A"},{"id":2,"name":"  "}]"#).await?;
        let mut store = JsonListStore::<Hero>::new(&path);
        assert!(matches!(store.get_by_id(1).await, Err(ServiceError::Storage(_))));

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn legacy_capitalised_file_loads_and_is_rewritten_lowercase() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await?;
        tokio::fs::write(&path, br#"[{"Id":1,"Name":"Metal Man"}]"#).await?;

        let mut store = JsonListStore::<Hero>::new(&path);
        store.create(Hero::new(0, "Firefly")).await?;
        assert_eq!(
            tokio::fs::read_to_string(&path).await?,
            r#"[{"id":1,"name":"Metal Man"},{"id":2,"name":"Firefly"}]"#
        );

        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_flush_leaves_memory_and_file_unchanged() -> Result<(), anyhow::Error> {
        let path = temp_store_path();
        let mut store = JsonListStore::<Hero>::new(&path);
        store.create(Hero::new(0, "A")).await?;

        // A directory squatting on the temp path makes the flush fail.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::create_dir_all(&tmp).await?;
        assert!(matches!(store.create(Hero::new(0, "B")).await, Err(ServiceError::Storage(_))));
        assert!(matches!(store.delete(1).await, Err(ServiceError::Storage(_))));
        assert_eq!(store.list().await?, &[Hero::new(1, "A")]);
        assert_eq!(read_file(&path).await?, vec![Hero::new(1, "A")]);

        tokio::fs::remove_dir_all(&tmp).await?;
        assert_eq!(store.create(Hero::new(0, "B")).await?.id, 2);

        cleanup(&path).await;
        Ok(())
    }
}
