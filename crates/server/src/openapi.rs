use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct HeroDoc { pub id: u64, pub name: String }

#[derive(ToSchema)]
pub struct HeroInputDoc {
    /// Ignored on create; must match the path id on update.
    pub id: Option<u64>,
    pub name: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::heroes::list_heroes,
        crate::routes::heroes::get_hero,
        crate::routes::heroes::create_hero,
        crate::routes::heroes::update_hero,
        crate::routes::heroes::delete_hero,
    ),
    components(
        schemas(
            HealthResponse,
            HeroDoc,
            HeroInputDoc,
            MessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "heroes")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
