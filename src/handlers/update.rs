use super::{NAME_PARAMETER, parse_body, path_name};
use crate::error::ApiError;
use crate::models::{HandlerRequest, HandlerResponse, UpdateKittenBody};
use crate::routes;
use crate::state::AppState;
use crate::store::{KittenStore, KittenUpdate};
use axum::extract::{Path, State};

/// Set a kitten's age, leaving its other attributes alone
///
/// The key is not checked for existence first; the store's upsert
/// semantics decide what happens to a missing kitten.
pub async fn update(store: &dyn KittenStore, request: HandlerRequest) -> HandlerResponse {
    update_kitten(store, &request)
        .await
        .unwrap_or_else(|err| err.into_handler_response("update"))
}

async fn update_kitten(
    store: &dyn KittenStore,
    request: &HandlerRequest,
) -> Result<HandlerResponse, ApiError> {
    let name = path_name(request)?;
    let body: UpdateKittenBody = parse_body(request.body.as_deref())?;

    let age = body
        .age
        .ok_or_else(|| ApiError::Validation("Missing parameters: age is required".to_string()))?;

    store.update(name, &KittenUpdate::age(age)).await?;

    tracing::info!("Successfully updated kitten: {}", name);
    Ok(HandlerResponse::status(200))
}

/// PUT /kittens/{name} handler - Update a kitten's age
#[utoipa::path(
    put,
    path = routes::KITTEN_ITEM,
    params(
        ("name" = String, Path, description = "Name of the kitten")
    ),
    request_body = UpdateKittenBody,
    responses(
        (status = 200, description = "Kitten updated"),
        (status = 400, description = "Malformed body or missing age"),
        (status = 500, description = "Store error")
    ),
    tag = "kittens"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: String,
) -> HandlerResponse {
    update(
        state.store.as_ref(),
        HandlerRequest::new()
            .with_path_parameter(NAME_PARAMETER, name)
            .with_body(body),
    )
    .await
}
