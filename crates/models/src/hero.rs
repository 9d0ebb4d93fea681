use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::resource::Resource;

/// A hero record as persisted and served.
///
/// `Id` / `Name` are accepted on read so files written by the earlier
/// capitalised format still load; they are written back lower-case.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    #[serde(alias = "Id")]
    pub id: u64,
    #[serde(alias = "Name")]
    pub name: String,
}

impl Hero {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl Resource for Hero {
    const NAME: &'static str = "Hero";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn check(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        Ok(())
    }
}

/// Create/update payload. `id` is optional: ignored on create, and on update
/// it must agree with the id in the path when present.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HeroInput {
    #[serde(default, alias = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(alias = "Name")]
    pub name: String,
}

impl HeroInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into() }
    }

    /// Presence check only: the name must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        Ok(())
    }

    /// Validate and turn into a record carrying `id`.
    pub fn into_hero(self, id: u64) -> Result<Hero, ModelError> {
        self.validate()?;
        Ok(Hero { id, name: self.name.trim().to_string() })
    }
}

/// The ten heroes the demo starts with.
pub fn demo_roster() -> Vec<&'static str> {
    vec![
        "Metal Man",
        "Firefly",
        "Mastermind",
        "Bulletproof",
        "Fireball",
        "Apex",
        "Turbine",
        "Tarantula",
        "Shockwave",
        "Steamroller",
    ]
}
