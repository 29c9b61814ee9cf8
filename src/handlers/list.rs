use crate::error::ApiError;
use crate::models::{HandlerRequest, HandlerResponse, Kitten};
use crate::routes;
use crate::state::AppState;
use crate::store::KittenStore;
use axum::extract::State;

/// List every stored kitten as `[{name, age}]`
///
/// 404 when the store holds nothing. There is no pagination; the store's
/// order is preserved.
pub async fn list(store: &dyn KittenStore, _request: HandlerRequest) -> HandlerResponse {
    list_kittens(store)
        .await
        .unwrap_or_else(|err| err.into_handler_response("list"))
}

async fn list_kittens(store: &dyn KittenStore) -> Result<HandlerResponse, ApiError> {
    let kittens = store.scan().await?;

    if kittens.is_empty() {
        tracing::info!("No kittens stored");
        return Ok(HandlerResponse::status(404));
    }

    tracing::info!("Listed {} kittens", kittens.len());
    HandlerResponse::json(200, &kittens).map_err(ApiError::Encoding)
}

/// GET /kittens handler - List all kittens
#[utoipa::path(
    get,
    path = routes::KITTENS,
    responses(
        (status = 200, description = "All stored kittens", body = Vec<Kitten>),
        (status = 404, description = "No kittens stored"),
        (status = 500, description = "Store error")
    ),
    tag = "kittens"
)]
pub async fn list_handler(State(state): State<AppState>) -> HandlerResponse {
    list(state.store.as_ref(), HandlerRequest::new()).await
}
