use models::{Hero, HeroInput};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{ResourceStores, StoreSession};

/// Hero CRUD over the `Hero.json` list store.
///
/// Opened once per request; holds the hero lock until dropped.
pub struct HeroStore {
    session: StoreSession<Hero>,
}

impl HeroStore {
    pub async fn open(stores: &ResourceStores) -> Self {
        Self { session: stores.open::<Hero>().await }
    }

    /// All heroes in stored order.
    pub async fn list(&mut self) -> Result<Vec<Hero>, ServiceError> {
        Ok(self.session.list().await?.to_vec())
    }

    pub async fn get(&mut self, id: u64) -> Result<Option<Hero>, ServiceError> {
        self.session.get_by_id(id).await
    }

    /// Validate and append; any id in the input is ignored.
    pub async fn create(&mut self, input: HeroInput) -> Result<Hero, ServiceError> {
        let hero = input.into_hero(0)?;
        let created = self.session.create(hero).await?;
        info!(hero_id = created.id, "hero created");
        Ok(created)
    }

    /// Replace the hero at `id`. `Ok(None)` when no hero has that id.
    ///
    /// A body id that disagrees with `id` is rejected rather than silently
    /// retargeting the update.
    pub async fn update(&mut self, id: u64, input: HeroInput) -> Result<Option<Hero>, ServiceError> {
        if let Some(body_id) = input.id {
            if body_id != id {
                return Err(ServiceError::Validation(format!(
                    "body id {body_id} does not match path id {id}"
                )));
            }
        }
        let hero = input.into_hero(id)?;
        if self.session.update(hero.clone()).await? {
            info!(hero_id = id, "hero updated");
            Ok(Some(hero))
        } else {
            Ok(None)
        }
    }

    pub async fn delete(&mut self, id: u64) -> Result<bool, ServiceError> {
        let existed = self.session.delete(id).await?;
        if existed {
            info!(hero_id = id, "hero deleted");
        }
        Ok(existed)
    }

    /// Create `names` in order when the store holds no heroes; returns how many were added.
    pub async fn seed_if_empty(&mut self, names: &[&str]) -> Result<usize, ServiceError> {
        if !self.session.list().await?.is_empty() {
            return Ok(0);
        }
        for name in names {
            self.create(HeroInput::named(*name)).await?;
        }
        info!(count = names.len(), "seeded demo heroes");
        Ok(names.len())
    }
}
