use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::api_doc::openapi_handler;
use crate::handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler, update_handler,
};
use crate::state::AppState;

// Route path constants - single source of truth for all API paths
pub const HEALTH: &str = "/health";
pub const KITTENS: &str = "/kittens";
pub const KITTEN_ITEM: &str = "/kittens/{name}";
pub const OPENAPI: &str = "/api-docs/openapi.json";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(health_handler))
        .route(KITTENS, post(create_handler).get(list_handler))
        .route(
            KITTEN_ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route(OPENAPI, get(openapi_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
