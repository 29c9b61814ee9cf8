use super::{NAME_PARAMETER, path_name};
use crate::error::ApiError;
use crate::models::{HandlerRequest, HandlerResponse, Kitten};
use crate::routes;
use crate::state::AppState;
use crate::store::KittenStore;
use axum::extract::{Path, State};

/// Fetch one kitten by the `name` path parameter
pub async fn get(store: &dyn KittenStore, request: HandlerRequest) -> HandlerResponse {
    get_kitten(store, &request)
        .await
        .unwrap_or_else(|err| err.into_handler_response("get"))
}

async fn get_kitten(
    store: &dyn KittenStore,
    request: &HandlerRequest,
) -> Result<HandlerResponse, ApiError> {
    let name = path_name(request)?;

    match store.get(name).await? {
        Some(kitten) => {
            tracing::info!("Successfully retrieved kitten: {}", name);
            HandlerResponse::json(200, &kitten).map_err(ApiError::Encoding)
        }
        None => Err(ApiError::KittenNotFound(name.to_string())),
    }
}

/// GET /kittens/{name} handler - Retrieve a kitten
#[utoipa::path(
    get,
    path = routes::KITTEN_ITEM,
    params(
        ("name" = String, Path, description = "Name of the kitten")
    ),
    responses(
        (status = 200, description = "Kitten found", body = Kitten),
        (status = 404, description = "Kitten not found"),
        (status = 500, description = "Store error")
    ),
    tag = "kittens"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResponse {
    get(
        state.store.as_ref(),
        HandlerRequest::new().with_path_parameter(NAME_PARAMETER, name),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::create::create;
    use crate::routes::testing::{body_string, send, test_app};
    use crate::store::InMemoryKittenStore;
    use crate::store::testing::{FailingStore, kitten};
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn request(name: &str) -> HandlerRequest {
        HandlerRequest::new().with_path_parameter(NAME_PARAMETER, name)
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = InMemoryKittenStore::new();

        let created = create(
            &store,
            HandlerRequest::new().with_body(r#"{"name":"Tom","age":3}"#),
        )
        .await;
        assert_eq!(created, HandlerResponse::status(201));

        let response = get(&store, request("Tom")).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body.as_deref(), Some(r#"{"name":"Tom","age":3}"#));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let store = InMemoryKittenStore::new();
        store.put(&kitten("Tom", 3)).await.unwrap();

        let response = get(&store, request("Nemo")).await;

        assert_eq!(response, HandlerResponse::status(404));
    }

    #[tokio::test]
    async fn test_get_missing_path_parameter() {
        let store = InMemoryKittenStore::new();

        let response = get(&store, HandlerRequest::new()).await;

        assert_eq!(response.status_code, 400);
    }

    #[tokio::test]
    async fn test_get_store_failure() {
        let response = get(&FailingStore, request("Tom")).await;

        assert_eq!(response, HandlerResponse::status(500));
    }

    #[tokio::test]
    async fn test_get_endpoint() {
        let store = Arc::new(InMemoryKittenStore::new());
        store.put(&kitten("Tom", 3)).await.unwrap();
        let app = test_app(store);

        let response = send(&app, "GET", "/kittens/Tom", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"name":"Tom","age":3}"#);

        let response = send(&app, "GET", "/kittens/Nemo", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.is_empty());
    }
}
