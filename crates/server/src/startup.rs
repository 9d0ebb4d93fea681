use std::future::Future;

use axum::Router;
use configs::AppConfig;
use models::hero::demo_roster;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::AppState};
use service::{file::hero_store::HeroStore, runtime};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Check directories, optionally seed the hero file, and build the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    runtime::ensure_env(&cfg.storage.frontend_dir, &cfg.storage.data_dir).await?;

    let state = AppState::new(cfg.storage.data_dir.clone());
    if cfg.storage.seed_demo {
        let mut store = HeroStore::open(&state.stores).await;
        let added = store.seed_if_empty(&demo_roster()).await?;
        info!(added, "demo seed checked");
    }

    Ok(routes::build_router(state, build_cors(), &cfg.storage.frontend_dir))
}

/// Public entry: build the app and serve until `shutdown` resolves
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, data_dir = %cfg.storage.data_dir.display(), "starting hero server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("hero server stopped");
    Ok(())
}
