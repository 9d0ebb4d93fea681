//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate only imports `service`.

use std::path::Path;

/// Ensure expected directories exist; warn on missing optional ones.
pub async fn ensure_env(frontend_dir: &Path, data_dir: &Path) -> anyhow::Result<()> {
    common::env::ensure_env(frontend_dir, data_dir).await
}
