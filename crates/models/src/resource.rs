use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

/// A record that can live in a file-backed list store.
///
/// `NAME` is the entity type name; it names the backing file (`<NAME>.json`)
/// and keys the per-type write lock.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const NAME: &'static str;

    fn id(&self) -> u64;

    fn set_id(&mut self, id: u64);

    /// Field checks a stored record must pass besides its id.
    fn check(&self) -> Result<(), ModelError> {
        Ok(())
    }
}
