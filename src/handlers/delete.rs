use super::{NAME_PARAMETER, path_name};
use crate::error::ApiError;
use crate::models::{HandlerRequest, HandlerResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::KittenStore;
use axum::extract::{Path, State};

/// Remove a kitten. Removing one that does not exist still answers 200.
pub async fn delete(store: &dyn KittenStore, request: HandlerRequest) -> HandlerResponse {
    delete_kitten(store, &request)
        .await
        .unwrap_or_else(|err| err.into_handler_response("delete"))
}

async fn delete_kitten(
    store: &dyn KittenStore,
    request: &HandlerRequest,
) -> Result<HandlerResponse, ApiError> {
    let name = path_name(request)?;

    store.delete(name).await?;

    tracing::info!("Successfully deleted kitten: {}", name);
    Ok(HandlerResponse::status(200))
}

/// DELETE /kittens/{name} handler - Delete a kitten
#[utoipa::path(
    delete,
    path = routes::KITTEN_ITEM,
    params(
        ("name" = String, Path, description = "Name of the kitten")
    ),
    responses(
        (status = 200, description = "Kitten deleted, or was never stored"),
        (status = 500, description = "Store error")
    ),
    tag = "kittens"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResponse {
    delete(
        state.store.as_ref(),
        HandlerRequest::new().with_path_parameter(NAME_PARAMETER, name),
    )
    .await
}
