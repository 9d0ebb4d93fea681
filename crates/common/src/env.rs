//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before any store is opened.

use std::path::Path;

use tracing::{info, warn};

/// Ensure the data directory exists; warn when the optional frontend directory is missing.
pub async fn ensure_env(frontend_dir: &Path, data_dir: &Path) -> anyhow::Result<()> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(frontend_dir = %frontend_dir.display(), "frontend assets directory not found; static assets will 404");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", data_dir.display()))?;
    info!(data_dir = %data_dir.display(), "data directory ready");
    Ok(())
}
