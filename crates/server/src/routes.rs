use std::path::Path;

use axum::{
    routing::{any, get},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::{metrics, openapi, state::AppState};

pub mod heroes;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Everything under `/api`. Unmatched paths and methods answer 404 `{"message":"Not Found"}`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/heroes",
            get(heroes::list_heroes)
                .post(heroes::create_hero)
                .fallback(heroes::api_not_found),
        )
        .route(
            "/heroes/:id",
            get(heroes::get_hero)
                .put(heroes::update_hero)
                .delete(heroes::delete_hero)
                .fallback(heroes::api_not_found),
        )
        .fallback(heroes::api_not_found)
}

/// Build the full application router: `/api`, health, metrics, docs, and static frontend fallback
pub fn build_router(state: AppState, cors: CorsLayer, frontend_dir: &Path) -> Router {
    let static_dir = ServeDir::new(frontend_dir).fallback(ServeFile::new(frontend_dir.join("index.html")));

    Router::new()
        .nest("/api", api_router())
        // the nested router does not see the bare trailing-slash prefix
        .route("/api/", any(heroes::api_not_found))
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
