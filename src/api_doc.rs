use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{CreateKittenBody, HealthResponse, Kitten, UnhealthyResponse, UpdateKittenBody};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "kitten-store API",
        version = "1.0.0",
        description = "Create, list, get, update and delete kittens backed by DynamoDB"
    ),
    paths(
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Kitten,
            CreateKittenBody,
            UpdateKittenBody,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "kittens", description = "Kitten operations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json handler
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
