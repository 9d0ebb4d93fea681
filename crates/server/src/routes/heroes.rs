use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use models::{Hero, HeroInput};
use service::file::hero_store::HeroStore;
use tracing::{debug, info};

use crate::{errors::ApiError, metrics, state::AppState};

/// Non-numeric or out-of-range ids cannot name a hero, so they read as 404.
fn hero_id(id: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!(error = %rejection, "unparseable hero id");
            Err(ApiError::not_found())
        }
    }
}

#[utoipa::path(
    get, path = "/api/heroes", tag = "heroes",
    responses(
        (status = 200, description = "All heroes in stored order", body = [crate::openapi::HeroDoc]),
        (status = 500, description = "Store unavailable", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_heroes(State(state): State<AppState>) -> Result<Json<Vec<Hero>>, ApiError> {
    metrics::record_request("list");
    let mut store = HeroStore::open(&state.stores).await;
    let heroes = store.list().await?;
    info!(count = heroes.len(), "list heroes");
    Ok(Json(heroes))
}

#[utoipa::path(
    get, path = "/api/heroes/{id}", tag = "heroes",
    params(("id" = u64, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Hero found", body = crate::openapi::HeroDoc),
        (status = 404, description = "No hero with that id", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_hero(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Hero>, ApiError> {
    metrics::record_request("get");
    let id = hero_id(id)?;
    let mut store = HeroStore::open(&state.stores).await;
    store.get(id).await?.map(Json).ok_or_else(ApiError::not_found)
}

#[utoipa::path(
    post, path = "/api/heroes", tag = "heroes",
    request_body = crate::openapi::HeroInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::HeroDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_hero(
    State(state): State<AppState>,
    payload: Result<Json<HeroInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Hero>), ApiError> {
    metrics::record_request("create");
    let Json(input) = payload?;
    let mut store = HeroStore::open(&state.stores).await;
    let created = store.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/heroes/{id}", tag = "heroes",
    params(("id" = u64, Path, description = "Hero id")),
    request_body = crate::openapi::HeroInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::HeroDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc),
        (status = 404, description = "No hero with that id", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update_hero(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<HeroInput>, JsonRejection>,
) -> Result<Json<Hero>, ApiError> {
    metrics::record_request("update");
    let id = hero_id(id)?;
    let Json(input) = payload?;
    let mut store = HeroStore::open(&state.stores).await;
    store.update(id, input).await?.map(Json).ok_or_else(ApiError::not_found)
}

#[utoipa::path(
    delete, path = "/api/heroes/{id}", tag = "heroes",
    params(("id" = u64, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Deleted", body = bool),
        (status = 404, description = "No hero with that id", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete_hero(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<bool>, ApiError> {
    metrics::record_request("delete");
    let id = hero_id(id)?;
    let mut store = HeroStore::open(&state.stores).await;
    if store.delete(id).await? {
        Ok(Json(true))
    } else {
        Err(ApiError::not_found())
    }
}

pub async fn api_not_found() -> ApiError {
    ApiError::not_found()
}
