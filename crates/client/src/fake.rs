use std::sync::Arc;

use async_trait::async_trait;
use models::Hero;
use tokio::sync::{Mutex, Notify};

use crate::errors::ClientError;
use crate::hero_client::HeroBackend;

/// In-memory backend for page tests. `failing` turns every call into a status error;
/// `gate`, when set, makes `get_heroes`/`get_hero` wait for a notification first.
#[derive(Default)]
pub struct FakeBackend {
    pub heroes: Mutex<Vec<Hero>>,
    pub failing: bool,
    pub gate: Option<Arc<Notify>>,
}

impl FakeBackend {
    pub fn with(names: &[&str]) -> Self {
        let heroes = names
            .iter()
            .enumerate()
            .map(|(i, name)| Hero::new(i as u64 + 1, *name))
            .collect();
        Self { heroes: Mutex::new(heroes), ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }

    fn check(&self) -> Result<(), ClientError> {
        if self.failing {
            return Err(ClientError::Status { status: 500, message: "Internal Server Error".into() });
        }
        Ok(())
    }

    async fn wait_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl HeroBackend for FakeBackend {
    async fn get_heroes(&self) -> Result<Vec<Hero>, ClientError> {
        self.wait_gate().await;
        self.check()?;
        Ok(self.heroes.lock().await.clone())
    }

    async fn get_hero(&self, id: u64) -> Result<Option<Hero>, ClientError> {
        self.wait_gate().await;
        self.check()?;
        Ok(self.heroes.lock().await.iter().find(|h| h.id == id).cloned())
    }

    async fn add_hero(&self, name: &str) -> Result<Hero, ClientError> {
        self.check()?;
        let mut heroes = self.heroes.lock().await;
        let id = heroes.iter().map(|h| h.id).max().unwrap_or(0) + 1;
        let hero = Hero::new(id, name);
        heroes.push(hero.clone());
        Ok(hero)
    }

    async fn update_hero(&self, hero: &Hero) -> Result<bool, ClientError> {
        self.check()?;
        let mut heroes = self.heroes.lock().await;
        match heroes.iter_mut().find(|h| h.id == hero.id) {
            Some(slot) => {
                *slot = hero.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_hero(&self, id: u64) -> Result<bool, ClientError> {
        self.check()?;
        let mut heroes = self.heroes.lock().await;
        let before = heroes.len();
        heroes.retain(|h| h.id != id);
        Ok(heroes.len() != before)
    }
}
