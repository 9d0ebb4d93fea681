use std::path::PathBuf;

use service::storage::ResourceStores;

/// Shared handler state. Carries no entity data: handlers open a store per request.
#[derive(Clone)]
pub struct AppState {
    pub stores: ResourceStores,
}

impl AppState {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self { stores: ResourceStores::new(data_dir) }
    }
}
